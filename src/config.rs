// Connection settings for the player backend.
//
// The backend serves the REST interface under /api and the push channel
// under /ws on the same host and port.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    3333
}

/// Where to reach the player backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Hostname or IP address of the backend
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP port of the backend
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
        }
    }

    /// Base URL for REST requests, e.g. "http://localhost:3333"
    pub fn http_base(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// URL of the push channel, e.g. "ws://localhost:3333/ws"
    pub fn ws_url(&self) -> String {
        format!("ws://{}:{}/ws", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_builders() {
        let config = ServerConfig::new("player.local", 3333);

        assert_eq!(config.http_base(), "http://player.local:3333");
        assert_eq!(config.ws_url(), "ws://player.local:3333/ws");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ServerConfig::default());

        let config: ServerConfig = serde_json::from_str(r#"{"host":"10.0.0.5"}"#).unwrap();
        assert_eq!(config.host, "10.0.0.5");
        assert_eq!(config.port, 3333);
    }
}
