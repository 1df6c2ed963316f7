//! Lazy catalog reader

use super::config::CatalogConfig;
use super::record;
use crate::model::Track;
use std::io::{BufRead, ErrorKind, Lines};
use std::iter::FusedIterator;

/// Iterator over the tracks of a catalog source.
///
/// Each call to `next` reads only as many lines as it takes to produce one
/// track. The reader owns its source, so dropping the iterator (after the
/// last track or midway) releases the underlying file.
#[derive(Debug)]
pub struct CatalogReader<R> {
    lines: Lines<R>,
    config: CatalogConfig,
    lines_read: usize,
    skipped: usize,
    finished: bool,
}

impl<R: BufRead> CatalogReader<R> {
    /// Wrap a buffered source
    pub fn new(source: R, config: CatalogConfig) -> Self {
        Self {
            lines: source.lines(),
            config,
            lines_read: 0,
            skipped: 0,
            finished: false,
        }
    }

    /// Lines consumed from the source so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Malformed lines skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn finish(&mut self) {
        self.finished = true;
        log::debug!(
            "Catalog exhausted: {} lines read, {} skipped",
            self.lines_read,
            self.skipped
        );
    }
}

impl<R: BufRead> Iterator for CatalogReader<R> {
    type Item = Track;

    fn next(&mut self) -> Option<Track> {
        if self.finished {
            return None;
        }

        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    self.lines_read += 1;
                    match record::parse_line(&line, &self.config) {
                        Some(track) => return Some(track),
                        None => {
                            self.skipped += 1;
                            log::debug!("Skipping malformed line {}: {:?}", self.lines_read, line);
                        }
                    }
                }
                // not UTF-8: the line is consumed, keep going
                Some(Err(e)) if e.kind() == ErrorKind::InvalidData => {
                    self.lines_read += 1;
                    self.skipped += 1;
                    log::debug!("Skipping unreadable line {}: {}", self.lines_read, e);
                }
                Some(Err(e)) => {
                    log::warn!("Catalog read failed after line {}: {}", self.lines_read, e);
                    self.finish();
                    return None;
                }
                None => {
                    self.finish();
                    return None;
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for CatalogReader<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
title;artist;duration;genres
Bohemian Rhapsody;Queen;355;Rock,Progressive Rock
broken line
Imagine;John Lennon;183;Pop
Hotel California;Eagles;391;Rock;1976-12-08
";

    #[test]
    fn test_reads_valid_lines_and_skips_others() {
        let mut reader = CatalogReader::new(Cursor::new(SAMPLE), CatalogConfig::default());
        let titles: Vec<String> = reader.by_ref().map(|t| t.title).collect();

        assert_eq!(titles, vec!["Bohemian Rhapsody", "Imagine", "Hotel California"]);
        assert_eq!(reader.lines_read(), 5);
        // header and broken line
        assert_eq!(reader.skipped(), 2);
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_reads_only_what_is_consumed() {
        let mut reader = CatalogReader::new(Cursor::new(SAMPLE), CatalogConfig::default());

        let first = reader.next().unwrap();
        assert_eq!(first.title, "Bohemian Rhapsody");
        assert_eq!(reader.lines_read(), 2);
    }

    #[test]
    fn test_skips_invalid_utf8() {
        let mut bytes = b"Bad\xff;X;1;Rock\n".to_vec();
        bytes.extend_from_slice(b"Good;X;2;Rock\n");

        let titles: Vec<String> = CatalogReader::new(Cursor::new(bytes), CatalogConfig::default())
            .map(|t| t.title)
            .collect();

        assert_eq!(titles, vec!["Good"]);
    }
}
