use crate::data::ControlCommand;
use crate::helpers::http_client::{default_http_client, HttpClient};
use crate::helpers::log_and_ignore;
use log::debug;

/// Dispatches control intents to the player backend.
///
/// Commands are fire-and-forget: the acknowledgment payload is logged and
/// discarded, never applied to the local snapshot. The resulting state change
/// is observed later through the push channel. Multiple intents may be
/// dispatched back-to-back; the backend is responsible for ordering their
/// effects.
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    /// Base URL of the backend, e.g. "http://localhost:3333"
    base_url: String,

    /// HTTP client used for outbound requests
    http: Box<dyn HttpClient>,
}

impl CommandDispatcher {
    /// Create a dispatcher using the default HTTP client
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, default_http_client())
    }

    /// Create a dispatcher with a custom HTTP client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the backend (no trailing slash)
    /// * `http` - HTTP client implementation to use for requests
    pub fn with_client(base_url: &str, http: Box<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Issue a single control request for the given command.
    ///
    /// Failures of any kind (transport, non-success status, malformed
    /// payload) are contained here: one diagnostic log entry, no error
    /// propagation, no state change.
    pub fn dispatch(&self, command: ControlCommand) {
        let url = format!("{}/api/{}", self.base_url, command.endpoint());
        debug!("Dispatching '{}' to {}", command, url);

        match self.http.post(&url) {
            Ok(ack) => {
                // The acknowledgment is informational only
                match ack.get("track").and_then(|t| t.as_str()) {
                    Some(track) => debug!("Command '{}' acknowledged, track: {}", command, track),
                    None => debug!("Command '{}' acknowledged", command),
                }
            }
            Err(e) => log_and_ignore(&format!("Command '{}' failed", command), &e),
        }
    }

    /// Resume or start playback
    pub fn play(&self) {
        self.dispatch(ControlCommand::Play);
    }

    /// Move to the previous track
    pub fn prev(&self) {
        self.dispatch(ControlCommand::Previous);
    }

    /// Move to the next track
    pub fn next(&self) {
        self.dispatch(ControlCommand::Next);
    }

    /// Halt playback
    pub fn stop(&self) {
        self.dispatch(ControlCommand::Stop);
    }

    /// Switch to the "all songs" playlist
    pub fn select_all_songs(&self) {
        self.dispatch(ControlCommand::AllSongs);
    }

    /// Switch to the backend-configured playlist
    pub fn select_configured_playlist(&self) {
        self.dispatch(ControlCommand::ConfiguredPlaylist);
    }
}
