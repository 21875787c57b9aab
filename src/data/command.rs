/// Control commands that can be dispatched to the player backend
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, EnumString)]
#[serde(rename_all = "lowercase")]
pub enum ControlCommand {
    /// Resume or start playback
    #[serde(rename = "play")]
    Play,

    /// Move to the previous track
    #[serde(rename = "prev")]
    Previous,

    /// Move to the next track
    #[serde(rename = "next")]
    Next,

    /// Halt playback
    #[serde(rename = "stop")]
    Stop,

    /// Switch to the "all songs" playlist
    #[serde(rename = "all")]
    AllSongs,

    /// Switch to the backend-configured playlist
    #[serde(rename = "playlist")]
    ConfiguredPlaylist,
}

impl ControlCommand {
    /// REST endpoint name for this command, relative to the API base
    pub fn endpoint(&self) -> &'static str {
        match self {
            ControlCommand::Play => "play",
            ControlCommand::Previous => "prev",
            ControlCommand::Next => "next",
            ControlCommand::Stop => "stop",
            ControlCommand::AllSongs => "all",
            ControlCommand::ConfiguredPlaylist => "playlist",
        }
    }
}

impl std::fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.endpoint())
    }
}
