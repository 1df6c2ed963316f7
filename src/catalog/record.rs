//! Single catalog line to track conversion

use super::config::CatalogConfig;
use crate::model::Track;
use chrono::NaiveDate;

/// Accepted release date layouts
const RELEASE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Fields of one catalog line, as written in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord<'a> {
    pub title: &'a str,
    pub artist: &'a str,
    pub duration: &'a str,
    pub genres: &'a str,
    pub release: Option<&'a str>,
}

impl<'a> CatalogRecord<'a> {
    /// Split a line into fields. Only 4 or 5 fields make a record.
    pub fn split(line: &'a str, delimiter: char) -> Option<Self> {
        let parts: Vec<&str> = line.split(delimiter).map(str::trim).collect();

        match *parts.as_slice() {
            [title, artist, duration, genres] => Some(Self {
                title,
                artist,
                duration,
                genres,
                release: None,
            }),
            [title, artist, duration, genres, release] => Some(Self {
                title,
                artist,
                duration,
                genres,
                release: Some(release),
            }),
            _ => None,
        }
    }

    /// Convert to a track. A missing title or artist, or an unreadable
    /// duration, rejects the record; an unreadable release date is dropped.
    pub fn to_track(&self, config: &CatalogConfig) -> Option<Track> {
        if self.title.is_empty() || self.artist.is_empty() {
            return None;
        }

        let duration = config.duration_unit.parse(self.duration)?;
        let genres = self
            .genres
            .split(config.genre_delimiter)
            .map(str::trim)
            .filter(|g| !g.is_empty());

        let mut track = Track::new(self.title, self.artist, duration).with_genres(genres);
        if let Some(release) = self.release.and_then(parse_release) {
            track = track.with_release(release);
        }

        Some(track)
    }
}

/// Parse one line, `None` when malformed
pub fn parse_line(line: &str, config: &CatalogConfig) -> Option<Track> {
    CatalogRecord::split(line, config.field_delimiter)?.to_track(config)
}

fn parse_release(raw: &str) -> Option<NaiveDate> {
    RELEASE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}
