/// HTTP client abstraction for the control and pull interfaces
pub mod http_client;

use log::warn;

/// Error containment policy for the control surface: failures are logged at
/// the boundary where they occur and never propagated upward. The backend
/// remains the source of truth regardless of client-side hiccups, so there is
/// no user-facing error state.
pub fn log_and_ignore(context: &str, error: &dyn std::fmt::Display) {
    warn!("{}: {}", context, error);
}
