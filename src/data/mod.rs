// Data structures for the audioremote client

pub mod command;
pub mod phase;
pub mod snapshot;

pub use command::ControlCommand;
pub use phase::PlayerPhase;
pub use snapshot::PlayerSnapshot;
