use chrono::NaiveDate;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Duration;

/// Represents a single song with its catalog metadata
///
/// Identity is the (title, artist) pair: two tracks with the same title and
/// artist are the same track, whatever their duration, genres or release date.
/// Source listings disagree on durations, so those never take part in
/// equality or hashing.
#[derive(Debug, Clone)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Track duration
    pub duration: Duration,

    /// Genre tags, in catalog order
    pub genres: Vec<String>,

    /// Release date (optional)
    pub release: Option<NaiveDate>,
}

impl Track {
    /// Create a new track without genres or release date
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration: Duration) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration,
            genres: Vec::new(),
            release: None,
        }
    }

    /// Shorthand for a track whose duration is given in whole seconds
    pub fn from_secs(title: impl Into<String>, artist: impl Into<String>, secs: u64) -> Self {
        Self::new(title, artist, Duration::from_secs(secs))
    }

    /// Set the genre tags
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// Set the release date
    pub fn with_release(mut self, release: NaiveDate) -> Self {
        self.release = Some(release);
        self
    }

    /// Whether this track is tagged with `genre` (case-insensitive)
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g.eq_ignore_ascii_case(genre))
    }

    /// Duration formatted as `m:ss`
    pub fn duration_str(&self) -> String {
        format_duration(self.duration)
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.artist == other.artist
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.artist.hash(state);
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.title, self.artist, self.duration_str())
    }
}

/// Format a duration as `m:ss`, or `h:mm:ss` past the hour
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let (hours, mins, secs) = (secs / 3600, (secs % 3600) / 60, secs % 60);

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}
