use super::{Playlist, Track};
use crate::ranking::{self, RankingEntry};
use indexmap::IndexSet;
use std::sync::Arc;
use std::time::Duration;

/// Music library: one shared instance per distinct track, plus named playlists
#[derive(Debug, Clone, Default)]
pub struct Library {
    /// All known tracks, deduplicated by identity
    tracks: IndexSet<Arc<Track>>,

    /// All playlists
    playlists: Vec<Playlist>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track to the library and return the shared instance.
    /// A track already known under the same identity is returned as-is.
    pub fn add_track(&mut self, track: impl Into<Arc<Track>>) -> Arc<Track> {
        let (index, _) = self.tracks.insert_full(track.into());
        Arc::clone(&self.tracks[index])
    }

    /// Add a playlist, replacing any playlist with the same name.
    /// Tracks that only the replaced playlist held leave the library.
    pub fn add_playlist(&mut self, playlist: Playlist) {
        let mut interned = Playlist::new(playlist.name.clone());
        for track in &playlist {
            interned.add(self.add_track(Arc::clone(track)));
        }
        let playlist = interned;

        match self.playlists.iter().position(|p| p.name == playlist.name) {
            Some(index) => {
                log::debug!("Replacing playlist '{}'", playlist.name);
                let replaced = std::mem::replace(&mut self.playlists[index], playlist);
                self.prune(&replaced);
            }
            None => self.playlists.push(playlist),
        }
    }

    /// Drop tracks of `replaced` that no remaining playlist holds
    fn prune(&mut self, replaced: &Playlist) {
        for track in replaced {
            if !self.playlists.iter().any(|p| p.contains(track)) {
                self.tracks.shift_remove(&**track);
                log::debug!("Dropped '{}' from the library", track);
            }
        }
    }

    /// Get a track by title and artist
    pub fn get_track(&self, title: &str, artist: &str) -> Option<&Arc<Track>> {
        self.tracks.get(&Track::new(title, artist, Duration::ZERO))
    }

    /// Get a playlist by name
    pub fn get_playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.name == name)
    }

    /// Get all tracks
    pub fn tracks(&self) -> impl Iterator<Item = &Arc<Track>> {
        self.tracks.iter()
    }

    /// Get all playlists
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Total number of tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Total number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    /// Tracks included in the most playlists
    pub fn top_played(&self, limit: usize) -> Vec<RankingEntry> {
        ranking::top_played(&self.playlists, limit)
    }
}
