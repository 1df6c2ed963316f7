use super::Track;
use crate::ordering::OrderingStrategy;
use indexmap::IndexSet;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

/// Name suffix of a playlist produced by [`Playlist::sorted_by`]
pub const SORTED_SUFFIX: &str = "(Ordenada)";

/// Name suffix of a playlist produced by [`Playlist::shuffled`]
pub const SHUFFLED_SUFFIX: &str = "(Modo Aleatório)";

/// Named, order-preserving, duplicate-free collection of tracks
///
/// Membership and order live in one insertion-ordered set keyed by track
/// identity, so the two can never drift apart.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    /// Playlist name
    pub name: String,

    /// Tracks in insertion order
    tracks: IndexSet<Arc<Track>>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: IndexSet::new(),
        }
    }

    /// Append a track unless an equal one is already present.
    /// Returns whether the track was inserted.
    pub fn add(&mut self, track: impl Into<Arc<Track>>) -> bool {
        self.tracks.insert(track.into())
    }

    /// Add tracks in order, skipping duplicates (within the batch too)
    pub fn add_many<I, T>(&mut self, tracks: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Arc<Track>>,
    {
        for track in tracks {
            self.add(track);
        }
    }

    /// First track whose title matches exactly. Blank titles never match.
    pub fn find_by_title(&self, title: &str) -> Option<&Arc<Track>> {
        if title.trim().is_empty() {
            return None;
        }

        self.tracks.iter().find(|t| t.title == title)
    }

    /// Remove the first track with this title, if any
    pub fn remove_by_title(&mut self, title: &str) -> Option<Arc<Track>> {
        let found = Arc::clone(self.find_by_title(title)?);
        self.tracks.shift_remove(&*found);

        log::debug!("Removed '{}' from playlist '{}'", found, self.name);
        Some(found)
    }

    /// Remove a track, keeping the order of the others.
    /// Returns whether it was present.
    pub fn remove(&mut self, track: &Track) -> bool {
        self.tracks.shift_remove(track)
    }

    pub fn contains(&self, track: &Track) -> bool {
        self.tracks.contains(track)
    }

    /// Position of a track in playback order
    pub fn position(&self, track: &Track) -> Option<usize> {
        self.tracks.get_index_of(track)
    }

    /// Track at a position in playback order
    pub fn get(&self, index: usize) -> Option<&Arc<Track>> {
        self.tracks.get_index(index)
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Number of tracks in this playlist
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Sum of all track durations
    pub fn total_duration(&self) -> Duration {
        self.tracks.iter().map(|t| t.duration).sum()
    }

    /// Iterate tracks in insertion order
    pub fn iter(&self) -> indexmap::set::Iter<'_, Arc<Track>> {
        self.tracks.iter()
    }

    /// New playlist with the tracks stably sorted by `strategy`.
    /// This playlist is left untouched.
    pub fn sorted_by<S: OrderingStrategy>(&self, strategy: S) -> Playlist {
        let mut tracks = self.tracks.clone();
        tracks.sort_by(|a, b| strategy.compare(a, b));

        Playlist {
            name: format!("{} {}", self.name, SORTED_SUFFIX),
            tracks,
        }
    }

    /// New playlist with the tracks in a uniformly random order.
    /// This playlist is left untouched.
    pub fn shuffled(&self) -> Playlist {
        self.shuffled_with(&mut rand::rng())
    }

    /// Like [`Playlist::shuffled`], drawing from the given generator
    pub fn shuffled_with<R: Rng>(&self, rng: &mut R) -> Playlist {
        let mut tracks: Vec<Arc<Track>> = self.tracks.iter().cloned().collect();
        fisher_yates(&mut tracks, rng);

        Playlist {
            name: format!("{} {}", self.name, SHUFFLED_SUFFIX),
            tracks: tracks.into_iter().collect(),
        }
    }
}

/// In-place Fisher-Yates shuffle: walk `i` from the end down to 1 and swap
/// with a uniform `k` in `[0, i]`.
pub fn fisher_yates<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let k = rng.random_range(0..=i);
        items.swap(i, k);
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Arc<Track>;
    type IntoIter = indexmap::set::Iter<'a, Arc<Track>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

impl<T: Into<Arc<Track>>> Extend<T> for Playlist {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_many(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{ByDuration, ByTitle};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn rock_nacional() -> Playlist {
        let mut playlist = Playlist::new("Rock Nacional");
        playlist.add_many([
            Track::from_secs("Tempo Perdido", "Legião Urbana", 295),
            Track::from_secs("Pro Dia Nascer Feliz", "Barão Vermelho", 225),
            Track::from_secs("Eduardo e Mônica", "Legião Urbana", 330),
            Track::from_secs("Geração Coca-Cola", "Legião Urbana", 230),
        ]);
        playlist
    }

    fn titles(playlist: &Playlist) -> Vec<&str> {
        playlist.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut playlist = rock_nacional();
        let before = titles(&playlist).join("|");

        let inserted = playlist.add(Track::from_secs("Tempo Perdido", "Legião Urbana", 1));

        assert!(!inserted);
        assert_eq!(playlist.len(), 4);
        assert_eq!(titles(&playlist).join("|"), before);
        // the original entry keeps its duration
        assert_eq!(playlist.get(0).unwrap().duration, Duration::from_secs(295));
    }

    #[test]
    fn test_add_many_skips_duplicates_within_batch() {
        let mut playlist = Playlist::new("Batch");
        playlist.add_many([
            Track::from_secs("A", "X", 10),
            Track::from_secs("B", "X", 10),
            Track::from_secs("A", "X", 20),
        ]);

        assert_eq!(titles(&playlist), vec!["A", "B"]);
    }

    #[test]
    fn test_count_tracks_adds_and_removes() {
        let mut playlist = rock_nacional();
        assert!(playlist.remove(&Track::from_secs("Tempo Perdido", "Legião Urbana", 0)));
        assert!(!playlist.remove(&Track::from_secs("Tempo Perdido", "Legião Urbana", 0)));
        playlist.add(Track::from_secs("Há Tempos", "Legião Urbana", 260));

        assert_eq!(playlist.len(), 4);
        assert_eq!(playlist.iter().count(), playlist.len());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut playlist = rock_nacional();
        playlist.remove(&Track::from_secs("Pro Dia Nascer Feliz", "Barão Vermelho", 0));

        assert_eq!(
            titles(&playlist),
            vec!["Tempo Perdido", "Eduardo e Mônica", "Geração Coca-Cola"]
        );
    }

    #[test]
    fn test_find_by_title() {
        let playlist = rock_nacional();

        assert_eq!(
            playlist.find_by_title("Eduardo e Mônica").unwrap().artist,
            "Legião Urbana"
        );
        assert!(playlist.find_by_title("Faroeste Caboclo").is_none());
        assert!(playlist.find_by_title("").is_none());
        assert!(playlist.find_by_title("   ").is_none());
    }

    #[test]
    fn test_remove_by_title() {
        let mut playlist = rock_nacional();

        let removed = playlist.remove_by_title("Geração Coca-Cola").unwrap();
        assert_eq!(removed.artist, "Legião Urbana");
        assert!(!playlist.contains(&removed));
        assert_eq!(playlist.len(), 3);

        assert!(playlist.remove_by_title("Geração Coca-Cola").is_none());
        assert!(playlist.remove_by_title("").is_none());
        assert_eq!(playlist.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut playlist = rock_nacional();
        playlist.clear();

        assert!(playlist.is_empty());
        assert!(!playlist.contains(&Track::from_secs("Tempo Perdido", "Legião Urbana", 0)));
        assert!(playlist.add(Track::from_secs("Tempo Perdido", "Legião Urbana", 0)));
    }

    #[test]
    fn test_iteration_is_restartable() {
        let playlist = rock_nacional();
        let first: Vec<_> = playlist.iter().collect();
        let second: Vec<_> = (&playlist).into_iter().collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_sorted_by_title() {
        let playlist = rock_nacional();
        let sorted = playlist.sorted_by(ByTitle);

        assert_eq!(sorted.name, "Rock Nacional (Ordenada)");
        assert_eq!(
            titles(&sorted),
            vec![
                "Eduardo e Mônica",
                "Geração Coca-Cola",
                "Pro Dia Nascer Feliz",
                "Tempo Perdido"
            ]
        );
        // source untouched
        assert_eq!(titles(&playlist)[0], "Tempo Perdido");
    }

    #[test]
    fn test_sort_is_stable() {
        let mut playlist = Playlist::new("Same length");
        playlist.add_many([
            Track::from_secs("C", "X", 200),
            Track::from_secs("A", "X", 100),
            Track::from_secs("B", "X", 200),
            Track::from_secs("D", "X", 100),
        ]);

        let sorted = playlist.sorted_by(ByDuration);
        assert_eq!(titles(&sorted), vec!["A", "D", "C", "B"]);
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let playlist = rock_nacional();
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = playlist.shuffled_with(&mut rng);

        assert_eq!(shuffled.name, "Rock Nacional (Modo Aleatório)");
        assert_eq!(shuffled.len(), playlist.len());
        assert!(playlist.iter().all(|t| shuffled.contains(t)));
        assert_eq!(titles(&playlist)[0], "Tempo Perdido");
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Playlist::new("Empty").shuffled_with(&mut rng).is_empty());

        let mut single = Playlist::new("One");
        single.add(Track::from_secs("Solo", "X", 1));
        assert_eq!(titles(&single.shuffled_with(&mut rng)), vec!["Solo"]);
    }

    #[test]
    fn test_shuffle_is_uniform() {
        // chi-square over the 6 permutations of 3 tracks
        let mut playlist = Playlist::new("Trio");
        playlist.add_many([
            Track::from_secs("A", "X", 1),
            Track::from_secs("B", "X", 1),
            Track::from_secs("C", "X", 1),
        ]);

        let trials = 60_000;
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..trials {
            let key = titles(&playlist.shuffled_with(&mut rng)).concat();
            *counts.entry(key).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = trials as f64 / 6.0;
        let chi_square: f64 = counts
            .values()
            .map(|&observed| (observed as f64 - expected).powi(2) / expected)
            .sum();

        // 5 degrees of freedom, p = 0.001
        assert!(chi_square < 20.52, "chi-square too high: {}", chi_square);
    }

    #[test]
    fn test_extend() {
        let mut playlist = Playlist::new("Extended");
        playlist.extend(vec![
            Arc::new(Track::from_secs("A", "X", 1)),
            Arc::new(Track::from_secs("A", "X", 2)),
        ]);

        assert_eq!(playlist.len(), 1);
    }
}
