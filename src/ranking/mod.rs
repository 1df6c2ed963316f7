//! Top-N report of tracks shared across playlists

mod report;

pub use report::{top_played, RankingEntry, DEFAULT_RANKING_LIMIT};
