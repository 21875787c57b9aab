/// Wire and domain data types
pub mod data;

/// Connection settings for the player backend
pub mod config;

/// Command dispatch to the backend REST interface
pub mod dispatcher;

/// Helper utilities for HTTP and error containment
pub mod helpers;

/// Push channel listener
pub mod listener;

/// Logging initialization
pub mod logging;

/// Snapshot rendering
pub mod render;

/// Canonical state ownership and reconciliation
pub mod synchronizer;

// Re-export the types most callers need
pub use data::{ControlCommand, PlayerPhase, PlayerSnapshot};
pub use dispatcher::CommandDispatcher;
pub use synchronizer::{StateListener, StateSynchronizer};
