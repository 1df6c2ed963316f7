//! Track ordering strategies
//!
//! Sorting a playlist takes any [`OrderingStrategy`]: one of the provided
//! unit strategies, a [`Reversed`] adaptor, or a plain closure.

mod strategies;
mod traits;

pub use strategies::{ByArtistThenDuration, ByDuration, ByRelease, ByTitle, Reversed};
pub use traits::OrderingStrategy;
