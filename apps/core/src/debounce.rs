use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct QueryDebouncer {
    delay: Duration,
    pending: Option<Pending>,
}

#[derive(Debug, Clone)]
struct Pending {
    text: String,
    deadline: Instant,
}

impl QueryDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    // Replaces any previously scheduled dispatch; only the most recent
    // text inside the window survives.
    pub fn schedule(&mut self, text: &str, now: Instant) {
        self.pending = Some(Pending {
            text: text.to_string(),
            deadline: now + self.delay,
        });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn due(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {
                let text = pending.text.clone();
                self.pending = None;
                Some(text)
            }
            _ => None,
        }
    }
}
