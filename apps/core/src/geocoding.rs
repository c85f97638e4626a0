pub mod mapsco;

use std::collections::VecDeque;

use crate::model::Feature;
use crate::query::QueryKind;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub sequence: u64,
    pub query: String,
    pub kind: QueryKind,
    pub language: String,
    pub types: Option<String>,
    pub limit: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    Transport(String),
    Endpoint { status: u16 },
    Decode(String),
}

impl std::fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(error) => write!(f, "transport error: {error}"),
            Self::Endpoint { status } => write!(f, "endpoint returned status {status}"),
            Self::Decode(error) => write!(f, "decode error: {error}"),
        }
    }
}

impl std::error::Error for GeocodeError {}

// The transport boundary. Responses are matched back to the session by
// the request's sequence number; the transport is never canceled.
pub trait GeocodingClient {
    fn search(&mut self, request: &SearchRequest) -> Result<Vec<Feature>, GeocodeError>;
}

#[derive(Default)]
pub struct MockGeocodingClient {
    requests: Vec<SearchRequest>,
    scripted: VecDeque<Result<Vec<Feature>, GeocodeError>>,
}

impl MockGeocodingClient {
    pub fn push_response(&mut self, outcome: Result<Vec<Feature>, GeocodeError>) {
        self.scripted.push_back(outcome);
    }

    pub fn requests(&self) -> &[SearchRequest] {
        &self.requests
    }
}

impl GeocodingClient for MockGeocodingClient {
    fn search(&mut self, request: &SearchRequest) -> Result<Vec<Feature>, GeocodeError> {
        self.requests.push(request.clone());
        self.scripted.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}
