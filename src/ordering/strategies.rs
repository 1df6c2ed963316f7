//! Built-in ordering strategies

use super::traits::OrderingStrategy;
use crate::model::Track;
use std::cmp::Ordering;

/// Lexicographic order by title
#[derive(Debug, Clone, Copy, Default)]
pub struct ByTitle;

impl OrderingStrategy for ByTitle {
    fn compare(&self, a: &Track, b: &Track) -> Ordering {
        a.title.cmp(&b.title)
    }
}

/// Shortest track first
#[derive(Debug, Clone, Copy, Default)]
pub struct ByDuration;

impl OrderingStrategy for ByDuration {
    fn compare(&self, a: &Track, b: &Track) -> Ordering {
        a.duration.cmp(&b.duration)
    }
}

/// Artist name, then shortest track first within an artist
#[derive(Debug, Clone, Copy, Default)]
pub struct ByArtistThenDuration;

impl OrderingStrategy for ByArtistThenDuration {
    fn compare(&self, a: &Track, b: &Track) -> Ordering {
        a.artist
            .cmp(&b.artist)
            .then_with(|| a.duration.cmp(&b.duration))
    }
}

/// Oldest release first; undated tracks go last
#[derive(Debug, Clone, Copy, Default)]
pub struct ByRelease;

impl OrderingStrategy for ByRelease {
    fn compare(&self, a: &Track, b: &Track) -> Ordering {
        match (a.release, b.release) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Inverts the wrapped strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<S>(pub S);

impl<S: OrderingStrategy> OrderingStrategy for Reversed<S> {
    fn compare(&self, a: &Track, b: &Track) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}
