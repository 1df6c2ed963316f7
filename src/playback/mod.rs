//! Playback engine
//!
//! A [`Player`] keeps an "up next" queue and a history of played tracks.
//! No audio is produced; playing a track only moves it between the two.

mod error;
mod player;

pub use error::PlayerError;
pub use player::Player;
