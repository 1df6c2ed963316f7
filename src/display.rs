//! Console rendering
//!
//! Everything here returns plain lines; printing is left to the caller.

use crate::model::{format_duration, Playlist, Track};
use crate::playback::Player;
use crate::ranking::RankingEntry;
use std::borrow::Borrow;

/// Full listing of a playlist
pub fn playlist_lines(playlist: &Playlist) -> Vec<String> {
    let mut lines = Vec::with_capacity(playlist.len() + 2);
    lines.push(format!(
        "Now listening to '{}' ({} tracks, {})",
        playlist.name,
        playlist.len(),
        format_duration(playlist.total_duration())
    ));
    lines.extend(playlist.iter().map(|t| format!("\t- {}", t)));
    lines.push("End of playlist.".to_string());
    lines
}

/// Up-next queue, next track first
pub fn queue_lines(player: &Player) -> Vec<String> {
    let mut lines = vec!["Up next:".to_string()];
    lines.extend(player.queue_snapshot().iter().map(|t| format!("\t- {}", t)));
    lines
}

/// Played history, most recent first
pub fn history_lines(player: &Player) -> Vec<String> {
    let mut lines = vec!["History:".to_string()];
    lines.extend(player.history_snapshot().iter().map(|t| format!("\t- {}", t)));
    lines
}

/// Ranking table, one place per line
pub fn ranking_lines(entries: &[RankingEntry]) -> Vec<String> {
    let mut lines = vec![format!("Top {} most played:", entries.len())];
    lines.extend(entries.iter().enumerate().map(|(i, entry)| {
        format!(
            "{}. {} ({} {})",
            i + 1,
            entry.track,
            entry.count,
            if entry.count == 1 { "playlist" } else { "playlists" }
        )
    }));
    lines
}

/// One catalog row: title, artist, seconds and release date when known
pub fn catalog_line<B: Borrow<Track>>(item: &B) -> String {
    let track: &Track = item.borrow();
    let mut line = format!(
        "\t- {} ({}) - {}s",
        track.title,
        track.artist,
        track.duration.as_secs()
    );
    if let Some(release) = track.release {
        line.push_str(&format!(" [{}]", release));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::top_played;

    #[test]
    fn test_playlist_lines() {
        let mut playlist = Playlist::new("Legião Urbana");
        playlist.add(Track::from_secs("Há Tempos", "Legião Urbana", 260));

        let lines = playlist_lines(&playlist);

        assert_eq!(lines[0], "Now listening to 'Legião Urbana' (1 tracks, 4:20)");
        assert_eq!(lines[1], "\t- Há Tempos - Legião Urbana (4:20)");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_queue_and_history_lines() {
        let mut player = Player::new();
        player.enqueue(Track::from_secs("One", "X", 60));
        player.enqueue(Track::from_secs("Two", "X", 60));
        player.play().unwrap();

        assert_eq!(queue_lines(&player), vec!["Up next:", "\t- Two - X (1:00)"]);
        assert_eq!(history_lines(&player), vec!["History:", "\t- One - X (1:00)"]);
    }

    #[test]
    fn test_ranking_lines() {
        let mut a = Playlist::new("A");
        a.add_many([Track::from_secs("x", "X", 60), Track::from_secs("y", "X", 60)]);
        let mut b = Playlist::new("B");
        b.add(Track::from_secs("y", "X", 60));

        let lines = ranking_lines(&top_played([&a, &b], 10));

        assert_eq!(
            lines,
            vec![
                "Top 2 most played:",
                "1. y - X (1:00) (2 playlists)",
                "2. x - X (1:00) (1 playlist)"
            ]
        );
    }

    #[test]
    fn test_catalog_line() {
        let track = Track::from_secs("Hotel California", "Eagles", 391)
            .with_release(chrono::NaiveDate::from_ymd_opt(1976, 12, 8).unwrap());

        assert_eq!(
            catalog_line(&track),
            "\t- Hotel California (Eagles) - 391s [1976-12-08]"
        );
    }
}
