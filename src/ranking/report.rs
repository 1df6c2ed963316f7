use crate::model::{Playlist, Track};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::sync::Arc;

/// Number of entries in a ranking when no limit is given
pub const DEFAULT_RANKING_LIMIT: usize = 10;

/// A track and the number of playlists that include it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    pub track: Arc<Track>,
    pub count: usize,
}

impl RankingEntry {
    /// Highest count first
    pub fn by_count_desc(a: &RankingEntry, b: &RankingEntry) -> Ordering {
        b.count.cmp(&a.count)
    }
}

/// Count how many of `playlists` contain each track and return the `limit`
/// most frequent, highest count first.
///
/// Equal counts keep first-seen order: playlists are walked in the order
/// given, each in its own playback order.
pub fn top_played<'a, I>(playlists: I, limit: usize) -> Vec<RankingEntry>
where
    I: IntoIterator<Item = &'a Playlist>,
{
    let mut counts: IndexMap<Arc<Track>, usize> = IndexMap::new();

    for playlist in playlists {
        for track in playlist {
            *counts.entry(Arc::clone(track)).or_insert(0) += 1;
        }
    }

    log::debug!("Ranking {} distinct tracks", counts.len());

    let mut entries: Vec<RankingEntry> = counts
        .into_iter()
        .map(|(track, count)| RankingEntry { track, count })
        .collect();

    // stable, so ties stay in first-seen order
    entries.sort_by(RankingEntry::by_count_desc);
    entries.truncate(limit);
    entries
}
