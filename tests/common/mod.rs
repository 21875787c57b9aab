use audioremote::data::PlayerSnapshot;
use audioremote::helpers::http_client::{HttpClient, HttpClientError};
use audioremote::synchronizer::StateListener;
use serde_json::Value;
use std::any::Any;
use std::sync::{Arc, Mutex};

/// Mock backend serving a canned pull response and recording every request
#[derive(Debug, Clone)]
pub struct MockBackend {
    /// Response returned for GET requests, None simulates an unreachable server
    pub state_response: Option<Value>,

    /// Response returned for POST requests
    pub command_response: Result<Value, ()>,

    requests: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    pub fn new(state_response: Option<Value>) -> Self {
        Self {
            state_response,
            command_response: Ok(serde_json::json!({ "track": "Song A" })),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            state_response: None,
            command_response: Err(()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockBackend {
    fn post(&self, url: &str) -> Result<Value, HttpClientError> {
        self.requests.lock().unwrap().push(format!("POST {}", url));
        match &self.command_response {
            Ok(value) => Ok(value.clone()),
            Err(_) => Err(HttpClientError::RequestError(
                "connection refused".to_string(),
            )),
        }
    }

    fn get_json(&self, url: &str) -> Result<Value, HttpClientError> {
        self.requests.lock().unwrap().push(format!("GET {}", url));
        match &self.state_response {
            Some(value) => Ok(value.clone()),
            None => Err(HttpClientError::RequestError(
                "connection refused".to_string(),
            )),
        }
    }

    fn clone_box(&self) -> Box<dyn HttpClient> {
        Box::new(self.clone())
    }
}

/// Listener collecting every snapshot it is notified of
pub struct SnapshotCollector {
    seen: Mutex<Vec<PlayerSnapshot>>,
}

impl SnapshotCollector {
    pub fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<PlayerSnapshot> {
        self.seen.lock().unwrap().clone()
    }
}

impl StateListener for SnapshotCollector {
    fn on_snapshot(&self, snapshot: &PlayerSnapshot) {
        self.seen.lock().unwrap().push(snapshot.clone());
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
