//! Ordering strategy trait definition

use crate::model::Track;
use std::cmp::Ordering;

/// Comparison policy for tracks - allows swapping sort orders at call sites
pub trait OrderingStrategy {
    /// Compare two tracks
    fn compare(&self, a: &Track, b: &Track) -> Ordering;

    /// Reverse this strategy
    fn reversed(self) -> super::Reversed<Self>
    where
        Self: Sized,
    {
        super::Reversed(self)
    }
}

impl<F> OrderingStrategy for F
where
    F: Fn(&Track, &Track) -> Ordering,
{
    fn compare(&self, a: &Track, b: &Track) -> Ordering {
        self(a, b)
    }
}
