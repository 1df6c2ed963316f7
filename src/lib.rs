//! Playlist Manager - playlists, playback queue and song catalog
//!
//! This library keeps duplicate-free playlists of songs, runs a playback
//! queue with history, ranks songs shared across playlists and reads song
//! catalogs lazily from delimited text files.

pub mod catalog;
pub mod display;
pub mod model;
pub mod ordering;
pub mod playback;
pub mod ranking;

pub use catalog::{CatalogConfig, CatalogReader, TrackQuery};
pub use model::{Library, Playlist, Track};
pub use playback::{Player, PlayerError};
pub use ranking::{top_played, RankingEntry};
