/// Player phase enumeration defining the playback states the backend reports
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use strum_macros::EnumString;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerPhase {
    /// Player is actively playing a track
    Playing,
    /// Playback is halted
    Stopped,
    /// Discriminant this client does not recognize; kept representable at the
    /// wire boundary so newer backend phases do not break deserialization
    Unknown,
}

impl Default for PlayerPhase {
    fn default() -> Self {
        PlayerPhase::Unknown
    }
}

// Any unrecognized discriminant maps to Unknown instead of failing the whole
// snapshot; the synchronizer decides what to do with it.
impl<'de> Deserialize<'de> for PlayerPhase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(PlayerPhase::from_str(&value).unwrap_or(PlayerPhase::Unknown))
    }
}

impl std::fmt::Display for PlayerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerPhase::Playing => write!(f, "playing"),
            PlayerPhase::Stopped => write!(f, "stopped"),
            PlayerPhase::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_phases_deserialize() {
        let phase: PlayerPhase = serde_json::from_str("\"playing\"").unwrap();
        assert_eq!(phase, PlayerPhase::Playing);

        let phase: PlayerPhase = serde_json::from_str("\"stopped\"").unwrap();
        assert_eq!(phase, PlayerPhase::Stopped);
    }

    #[test]
    fn test_unrecognized_phase_maps_to_unknown() {
        let phase: PlayerPhase = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(phase, PlayerPhase::Unknown);

        let phase: PlayerPhase = serde_json::from_str("\"buffering\"").unwrap();
        assert_eq!(phase, PlayerPhase::Unknown);
    }
}
