use thiserror::Error;

/// Failures of player navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// `play` or `advance` with nothing queued
    #[error("the playback queue is empty")]
    EmptyQueue,

    /// `back` before anything was played
    #[error("the playback history is empty")]
    EmptyHistory,
}
