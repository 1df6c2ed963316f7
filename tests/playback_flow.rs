use playlist_manager::model::{Library, Playlist, Track};
use playlist_manager::ordering::ByTitle;
use playlist_manager::playback::{Player, PlayerError};
use playlist_manager::ranking::top_played;
use std::sync::Arc;

/// Playlist with four listings, two of them the same song
fn rock_nacional() -> Playlist {
    let mut playlist = Playlist::new("Músicas de Rock nacionais");
    playlist.add_many([
        Track::from_secs("Tempo Perdido", "Legião Urbana", 295),
        Track::from_secs("Pro Dia Nascer Feliz", "Barão Vermelho", 225),
        Track::from_secs("Geração Coca-Cola", "Legião Urbana", 230),
        Track::from_secs("Geração Coca-Cola", "Legião Urbana", 230),
    ]);
    playlist
}

#[test]
fn test_dedup_happens_at_playlist_level() {
    let mut player = Player::new();
    player.enqueue(Track::from_secs("Bohemian Rhapsody", "Queen", 355));
    player.enqueue_playlist(&rock_nacional());

    assert_eq!(player.queue_len(), 1 + 3);
    assert_eq!(player.queue_snapshot()[0].title, "Bohemian Rhapsody");
}

#[test]
fn test_play_back_advance_sequence() {
    let mut player = Player::new();
    player.enqueue(Track::from_secs("Bohemian Rhapsody", "Queen", 355));
    player.enqueue_playlist(&rock_nacional());

    assert_eq!(player.play().unwrap().title, "Bohemian Rhapsody");
    assert_eq!(player.play().unwrap().title, "Tempo Perdido");
    assert_eq!(player.back().unwrap().title, "Tempo Perdido");
    assert_eq!(player.back().unwrap().title, "Tempo Perdido");
    assert_eq!(player.history_len(), 2);

    assert_eq!(player.play().unwrap().title, "Pro Dia Nascer Feliz");
    assert_eq!(player.advance().unwrap().title, "Geração Coca-Cola");
    assert_eq!(player.play().unwrap_err(), PlayerError::EmptyQueue);

    let history: Vec<String> = player
        .history_snapshot()
        .iter()
        .map(|t| t.title.clone())
        .collect();
    assert_eq!(
        history,
        vec!["Pro Dia Nascer Feliz", "Tempo Perdido", "Bohemian Rhapsody"]
    );
}

#[test]
fn test_player_error_messages() {
    assert_eq!(
        PlayerError::EmptyQueue.to_string(),
        "the playback queue is empty"
    );
    assert_eq!(
        PlayerError::EmptyHistory.to_string(),
        "the playback history is empty"
    );
}

#[test]
fn test_derived_views_do_not_touch_source() {
    let playlist = rock_nacional();
    let before: Vec<Arc<Track>> = playlist.iter().cloned().collect();

    let sorted = playlist.sorted_by(ByTitle);
    let shuffled = playlist.shuffled();

    let after: Vec<Arc<Track>> = playlist.iter().cloned().collect();
    assert_eq!(before, after);
    assert_eq!(sorted.len(), 3);
    assert_eq!(shuffled.len(), 3);
    assert!(sorted
        .iter()
        .zip(sorted.iter().skip(1))
        .all(|(a, b)| a.title <= b.title));
}

#[test]
fn test_ranking_across_library() {
    let mut library = Library::new();
    library.add_playlist(rock_nacional());

    let mut legiao = Playlist::new("Legião Urbana");
    legiao.add_many([
        Track::from_secs("Tempo Perdido", "Legião Urbana", 295),
        Track::from_secs("Há Tempos", "Legião Urbana", 260),
    ]);
    library.add_playlist(legiao);

    let ranking = library.top_played(10);
    assert_eq!(ranking[0].track.title, "Tempo Perdido");
    assert_eq!(ranking[0].count, 2);
    assert_eq!(ranking.len(), 4);

    let direct = top_played(library.playlists(), 10);
    assert_eq!(direct, ranking);
}
