//! Declarative queries over track sequences
//!
//! [`TrackQuery`] is implemented for every iterator of tracks (owned,
//! borrowed or `Arc`-shared). Filters stay lazy and compose with the
//! standard adaptors; aggregates consume the iterator.

use crate::model::Track;
use crate::ordering::OrderingStrategy;
use indexmap::{IndexMap, IndexSet};
use std::borrow::Borrow;
use std::time::Duration;

fn track<B: Borrow<Track>>(item: &B) -> &Track {
    item.borrow()
}

pub trait TrackQuery: Iterator + Sized
where
    Self::Item: Borrow<Track>,
{
    /// Tracks by exactly this artist
    fn by_artist(self, artist: impl Into<String>) -> impl Iterator<Item = Self::Item> {
        let artist = artist.into();
        self.filter(move |t| track(t).artist == artist)
    }

    /// Tracks tagged with this genre (case-insensitive)
    fn with_genre(self, genre: impl Into<String>) -> impl Iterator<Item = Self::Item> {
        let genre = genre.into();
        self.filter(move |t| track(t).has_genre(&genre))
    }

    /// Tracks strictly longer than `min`
    fn longer_than(self, min: Duration) -> impl Iterator<Item = Self::Item> {
        self.filter(move |t| track(t).duration > min)
    }

    /// Tracks whose title starts with `prefix`
    fn title_starts_with(self, prefix: impl Into<String>) -> impl Iterator<Item = Self::Item> {
        let prefix = prefix.into();
        self.filter(move |t| track(t).title.starts_with(prefix.as_str()))
    }

    /// All tracks, stably sorted by `strategy`
    fn sorted_by<S: OrderingStrategy>(self, strategy: S) -> Vec<Self::Item> {
        let mut tracks: Vec<Self::Item> = self.collect();
        tracks.sort_by(|a, b| strategy.compare(track(a), track(b)));
        tracks
    }

    /// The `n` longest tracks, longest first
    fn longest(self, n: usize) -> Vec<Self::Item> {
        let mut tracks: Vec<Self::Item> = self.collect();
        tracks.sort_by(|a, b| track(b).duration.cmp(&track(a).duration));
        tracks.truncate(n);
        tracks
    }

    /// Artists in first-seen order
    fn distinct_artists(self) -> Vec<String> {
        let artists: IndexSet<String> = self.map(|t| track(&t).artist.clone()).collect();
        artists.into_iter().collect()
    }

    /// Genres in first-seen order
    fn distinct_genres(self) -> Vec<String> {
        let mut genres = IndexSet::new();
        for item in self {
            genres.extend(track(&item).genres.iter().cloned());
        }
        genres.into_iter().collect()
    }

    /// Tracks grouped by artist, artists in first-seen order
    fn artists_with_tracks(self) -> IndexMap<String, Vec<Self::Item>> {
        let mut groups: IndexMap<String, Vec<Self::Item>> = IndexMap::new();
        for item in self {
            let artist = track(&item).artist.clone();
            groups.entry(artist).or_default().push(item);
        }
        groups
    }

    /// Artist with the most tracks; ties go to the artist seen first
    fn top_artist(self) -> Option<(String, usize)> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for item in self {
            *counts.entry(track(&item).artist.clone()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .fold(None, |best, (artist, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((artist, count)),
            })
    }

    /// Sum of durations
    fn total_duration(self) -> Duration {
        self.map(|t| track(&t).duration).sum()
    }

    /// Mean duration, `None` for an empty sequence
    fn average_duration(self) -> Option<Duration> {
        let (total, count) = self.fold((Duration::ZERO, 0u32), |(total, count), t| {
            (total + track(&t).duration, count + 1)
        });

        (count > 0).then(|| total / count)
    }
}

impl<I> TrackQuery for I
where
    I: Iterator,
    I::Item: Borrow<Track>,
{
}
