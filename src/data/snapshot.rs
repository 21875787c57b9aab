use super::PlayerPhase;
use serde::{Deserialize, Serialize};

/// A complete description of player state: phase, current track, playlist
/// position and playlist contents. Each snapshot fully determines the display
/// with no reference to prior state, so reconciliation is whole-object
/// substitution, never field-by-field merging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// Playback phase; wire field `state`
    #[serde(rename = "state")]
    pub phase: PlayerPhase,

    /// Name of the track currently associated with the phase; wire field `songname`
    #[serde(rename = "songname", default)]
    pub song_name: String,

    /// Zero-based index into `playlist`; wire field `pos`.
    /// Not validated against the playlist length; the renderer tolerates
    /// out-of-range values.
    #[serde(rename = "pos", default)]
    pub position: usize,

    /// Track names in playback order
    #[serde(default)]
    pub playlist: Vec<String>,
}

impl PlayerSnapshot {
    /// Whether the phase discriminant was recognized. Snapshots with an
    /// unrecognized phase are parseable but never become canonical state.
    pub fn has_known_phase(&self) -> bool {
        self.phase != PlayerPhase::Unknown
    }
}

impl std::fmt::Display for PlayerSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} ({}/{})",
            self.phase,
            self.song_name,
            self.position.saturating_add(1),
            self.playlist.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{"state":"playing","songname":"Song B","pos":1,"playlist":["Song A","Song B"]}"#;
        let snapshot: PlayerSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.phase, PlayerPhase::Playing);
        assert_eq!(snapshot.song_name, "Song B");
        assert_eq!(snapshot.position, 1);
        assert_eq!(snapshot.playlist, vec!["Song A", "Song B"]);
    }

    #[test]
    fn test_missing_optional_fields_get_defaults() {
        let json = r#"{"state":"stopped"}"#;
        let snapshot: PlayerSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.phase, PlayerPhase::Stopped);
        assert_eq!(snapshot.song_name, "");
        assert_eq!(snapshot.position, 0);
        assert!(snapshot.playlist.is_empty());
    }

    #[test]
    fn test_serialize_uses_wire_field_names() {
        let snapshot = PlayerSnapshot {
            phase: PlayerPhase::Stopped,
            song_name: "Song A".to_string(),
            position: 0,
            playlist: vec!["Song A".to_string()],
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["state"], "stopped");
        assert_eq!(value["songname"], "Song A");
        assert_eq!(value["pos"], 0);
        assert_eq!(value["playlist"][0], "Song A");
    }

    #[test]
    fn test_unknown_phase_is_parseable() {
        let json = r#"{"state":"paused","songname":"Song A","pos":0,"playlist":["Song A"]}"#;
        let snapshot: PlayerSnapshot = serde_json::from_str(json).unwrap();

        assert!(!snapshot.has_known_phase());
    }
}
