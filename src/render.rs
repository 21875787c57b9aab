use crate::data::PlayerSnapshot;
use crate::synchronizer::StateListener;
use log::debug;
use std::any::Any;

/// A single playlist row in the rendered view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    /// Track name
    pub name: String,

    /// Whether this entry is the one at the playlist position
    pub active: bool,
}

/// Fully rendered projection of a snapshot. Every field is recomputed from
/// scratch on each render; nothing is carried over from a previous view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    /// Phase label, "playing" or "stopped"
    pub phase_label: String,

    /// Current track name
    pub current_track: String,

    /// Position label in "position / total" form, e.g. "2/2"
    pub position_label: String,

    /// All playlist entries, with the entry at the playlist position marked active
    pub entries: Vec<RenderedEntry>,
}

/// Render a snapshot into a view.
///
/// Pure projection: both phases share this one routine and differ only in
/// the phase label. An out-of-range position never fails; it simply marks no
/// entry active.
pub fn render(snapshot: &PlayerSnapshot) -> RenderedView {
    let entries = snapshot
        .playlist
        .iter()
        .enumerate()
        .map(|(index, name)| RenderedEntry {
            name: name.clone(),
            active: index == snapshot.position,
        })
        .collect();

    RenderedView {
        phase_label: snapshot.phase.to_string(),
        current_track: snapshot.song_name.clone(),
        position_label: format!(
            "{}/{}",
            snapshot.position.saturating_add(1),
            snapshot.playlist.len()
        ),
        entries,
    }
}

impl std::fmt::Display for RenderedView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "State: {}", self.phase_label)?;
        writeln!(f, "Current track: {}", self.current_track)?;
        writeln!(f, "Playlist {}", self.position_label)?;
        for entry in &self.entries {
            let marker = if entry.active { ">" } else { " " };
            writeln!(f, " {} {}", marker, entry.name)?;
        }
        Ok(())
    }
}

/// Renders every accepted snapshot to the console.
///
/// Stateless beyond what is currently shown: each notification fully
/// replaces the previous output.
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn new() -> Self {
        ConsoleRenderer
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StateListener for ConsoleRenderer {
    fn on_snapshot(&self, snapshot: &PlayerSnapshot) {
        debug!("Rendering snapshot {}", snapshot);
        println!("{}", render(snapshot));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PlayerPhase;

    fn snapshot(phase: PlayerPhase, song: &str, position: usize, playlist: &[&str]) -> PlayerSnapshot {
        PlayerSnapshot {
            phase,
            song_name: song.to_string(),
            position,
            playlist: playlist.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_position_label_and_active_entry() {
        let view = render(&snapshot(
            PlayerPhase::Playing,
            "Song B",
            1,
            &["Song A", "Song B"],
        ));

        assert_eq!(view.phase_label, "playing");
        assert_eq!(view.current_track, "Song B");
        assert_eq!(view.position_label, "2/2");
        assert_eq!(view.entries.len(), 2);
        assert!(!view.entries[0].active);
        assert!(view.entries[1].active);
    }

    #[test]
    fn test_phases_share_layout() {
        let playing = render(&snapshot(PlayerPhase::Playing, "Song A", 0, &["Song A"]));
        let stopped = render(&snapshot(PlayerPhase::Stopped, "Song A", 0, &["Song A"]));

        assert_eq!(playing.current_track, stopped.current_track);
        assert_eq!(playing.position_label, stopped.position_label);
        assert_eq!(playing.entries, stopped.entries);
        assert_ne!(playing.phase_label, stopped.phase_label);
    }

    #[test]
    fn test_out_of_range_position_marks_nothing_active() {
        let view = render(&snapshot(
            PlayerPhase::Playing,
            "Song A",
            5,
            &["Song A", "Song B"],
        ));

        assert_eq!(view.position_label, "6/2");
        assert!(view.entries.iter().all(|entry| !entry.active));
    }

    #[test]
    fn test_empty_playlist_renders() {
        let view = render(&snapshot(PlayerPhase::Stopped, "", 0, &[]));

        assert_eq!(view.position_label, "1/0");
        assert!(view.entries.is_empty());
    }

    #[test]
    fn test_rendering_is_pure() {
        let snap = snapshot(PlayerPhase::Playing, "Song B", 1, &["Song A", "Song B"]);

        assert_eq!(render(&snap), render(&snap));
    }

    #[test]
    fn test_display_marks_active_entry() {
        let view = render(&snapshot(
            PlayerPhase::Playing,
            "Song B",
            1,
            &["Song A", "Song B"],
        ));
        let text = view.to_string();

        assert!(text.contains("State: playing"));
        assert!(text.contains("Current track: Song B"));
        assert!(text.contains("Playlist 2/2"));
        assert!(text.contains(" > Song B"));
        assert!(text.contains("   Song A"));
    }
}
