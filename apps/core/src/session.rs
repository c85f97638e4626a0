use crate::model::{Feature, SelectedResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Cleared,
    Pending,
    Resolved,
    Errored,
}

// The lifecycle record for the current query. Sessions are replaced in
// place: `begin` bumps the sequence so any response still in flight for
// the previous query fails the `accepts` check and is dropped.
#[derive(Debug)]
pub struct ResultSession {
    sequence: u64,
    status: SessionStatus,
    query: String,
    candidates: Vec<Feature>,
    selected: Option<SelectedResult>,
}

impl Default for ResultSession {
    fn default() -> Self {
        Self {
            sequence: 0,
            status: SessionStatus::Cleared,
            query: String::new(),
            candidates: Vec::new(),
            selected: None,
        }
    }
}

impl ResultSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, query: &str) -> u64 {
        self.sequence += 1;
        self.status = SessionStatus::Pending;
        self.query = query.to_string();
        self.candidates.clear();
        self.selected = None;
        self.sequence
    }

    // A response is honored only while the session is still waiting for
    // this exact sequence number.
    pub fn accepts(&self, sequence: u64) -> bool {
        self.status == SessionStatus::Pending && self.sequence == sequence
    }

    pub fn resolve(&mut self, candidates: Vec<Feature>) -> Option<SelectedResult> {
        self.status = SessionStatus::Resolved;
        self.candidates = candidates;
        self.selected = self.candidates.first().map(SelectedResult::from);
        self.selected.clone()
    }

    pub fn select(&mut self, index: usize) -> Option<SelectedResult> {
        if self.status != SessionStatus::Resolved {
            return None;
        }
        let picked = self.candidates.get(index).map(SelectedResult::from)?;
        self.selected = Some(picked.clone());
        Some(picked)
    }

    pub fn fail(&mut self) {
        self.status = SessionStatus::Errored;
    }

    pub fn clear(&mut self) {
        self.sequence += 1;
        self.status = SessionStatus::Cleared;
        self.query.clear();
        self.candidates.clear();
        self.selected = None;
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[Feature] {
        &self.candidates
    }

    pub fn selected(&self) -> Option<&SelectedResult> {
        self.selected.as_ref()
    }
}
