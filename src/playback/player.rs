use super::PlayerError;
use crate::model::{Playlist, Track};
use std::collections::VecDeque;
use std::sync::Arc;

/// Up-next queue (FIFO) plus played history (LIFO)
#[derive(Debug, Default)]
pub struct Player {
    queue: VecDeque<Arc<Track>>,
    history: Vec<Arc<Track>>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track to the end of the queue
    pub fn enqueue(&mut self, track: impl Into<Arc<Track>>) {
        let track = track.into();
        log::debug!("Queued: {}", track);
        self.queue.push_back(track);
    }

    /// Append every track of a playlist, in playlist order.
    /// The queue shares the playlist's tracks rather than copying them.
    pub fn enqueue_playlist(&mut self, playlist: &Playlist) {
        log::debug!(
            "Queued playlist '{}' ({} tracks)",
            playlist.name,
            playlist.len()
        );
        self.queue.extend(playlist.iter().cloned());
    }

    /// Play the head of the queue, moving it onto the history
    pub fn play(&mut self) -> Result<Arc<Track>, PlayerError> {
        let track = self.queue.pop_front().ok_or(PlayerError::EmptyQueue)?;
        self.history.push(Arc::clone(&track));

        log::info!("Playing: {}", track);
        Ok(track)
    }

    /// Skip the head of the queue without recording it as played
    pub fn advance(&mut self) -> Result<Arc<Track>, PlayerError> {
        let track = self.queue.pop_front().ok_or(PlayerError::EmptyQueue)?;

        log::info!("Skipped: {}", track);
        Ok(track)
    }

    /// Most recently played track. History is left as it is, so repeated
    /// calls return the same track until the next `play`.
    pub fn back(&self) -> Result<&Arc<Track>, PlayerError> {
        let track = self.history.last().ok_or(PlayerError::EmptyHistory)?;

        log::info!("Back to: {}", track);
        Ok(track)
    }

    /// Queued tracks, next to play first
    pub fn queue_snapshot(&self) -> Vec<Arc<Track>> {
        self.queue.iter().cloned().collect()
    }

    /// Played tracks, most recent first
    pub fn history_snapshot(&self) -> Vec<Arc<Track>> {
        self.history.iter().rev().cloned().collect()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Drop everything still queued; history is kept
    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }
}
