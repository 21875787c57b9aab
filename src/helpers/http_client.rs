use log::{debug, error};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Default timeout for HTTP requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Error types that can occur when interacting with HTTP clients
#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("HTTP request error: {0}")]
    RequestError(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Empty response from server")]
    EmptyResponse,
}

/// A trait for HTTP client implementations
/// This version avoids generic methods to enable dynamic dispatch
pub trait HttpClient: Send + Sync + std::fmt::Debug {
    /// Send a POST request with no body and parse the response as JSON
    fn post(&self, url: &str) -> Result<Value, HttpClientError>;

    /// Send a GET request and parse the response as JSON
    fn get_json(&self, url: &str) -> Result<Value, HttpClientError>;

    /// Clone the client as a boxed trait object
    fn clone_box(&self) -> Box<dyn HttpClient>;
}

impl Clone for Box<dyn HttpClient> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// An HTTP client implementation using ureq
#[derive(Clone, Debug)]
pub struct UreqHttpClient {
    timeout: Duration,
}

impl UreqHttpClient {
    /// Create a new HTTP client with the specified timeout
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    fn parse_response(response: ureq::Response) -> Result<Value, HttpClientError> {
        let response_text = match response.into_string() {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to read response body: {}", e);
                return Err(HttpClientError::ParseError(format!(
                    "Failed to read response body: {}",
                    e
                )));
            }
        };

        if response_text.is_empty() {
            return Err(HttpClientError::EmptyResponse);
        }

        match serde_json::from_str::<Value>(&response_text) {
            Ok(json_value) => Ok(json_value),
            Err(e) => {
                error!("Failed to parse JSON response: {}", e);
                error!("Response text: {}", response_text);
                Err(HttpClientError::ParseError(e.to_string()))
            }
        }
    }
}

impl HttpClient for UreqHttpClient {
    fn post(&self, url: &str) -> Result<Value, HttpClientError> {
        debug!("POST request to {}", url);

        let response = match ureq::post(url).timeout(self.timeout).call() {
            Ok(resp) => resp,
            Err(e) => {
                error!("POST request failed: {}", e);
                return Err(HttpClientError::RequestError(e.to_string()));
            }
        };

        Self::parse_response(response)
    }

    fn get_json(&self, url: &str) -> Result<Value, HttpClientError> {
        debug!("GET request to {}", url);

        let response = match ureq::get(url).timeout(self.timeout).call() {
            Ok(resp) => resp,
            Err(e) => {
                error!("GET request failed: {}", e);
                return Err(HttpClientError::RequestError(e.to_string()));
            }
        };

        Self::parse_response(response)
    }

    fn clone_box(&self) -> Box<dyn HttpClient> {
        Box::new(self.clone())
    }
}

/// Create a new HTTP client using the default implementation
pub fn new_http_client(timeout_secs: u64) -> Box<dyn HttpClient> {
    Box::new(UreqHttpClient::new(timeout_secs))
}

/// Create a new HTTP client with the default timeout
pub fn default_http_client() -> Box<dyn HttpClient> {
    new_http_client(DEFAULT_TIMEOUT_SECS)
}
