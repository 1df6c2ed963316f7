//! Data model for tracks, playlists and the library that holds them
//!
//! Tracks are shared as `Arc<Track>` between playlists, the library and the
//! player; nothing here mutates a track after construction.

mod library;
mod playlist;
mod track;

pub use library::Library;
pub use playlist::{fisher_yates, Playlist, SHUFFLED_SUFFIX, SORTED_SUFFIX};
pub use track::{format_duration, Track};
