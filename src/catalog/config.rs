//! Catalog source configuration

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Unit of the duration column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    /// Whole seconds, e.g. `355`
    #[default]
    Seconds,

    /// Minutes and seconds written as `m.ss`, e.g. `5.55` for 5:55.
    /// A single fraction digit is tens of seconds (`3.5` is 3:50).
    Minutes,
}

impl DurationUnit {
    /// Parse a raw duration field in this unit
    pub fn parse(&self, raw: &str) -> Option<Duration> {
        let raw = raw.trim();
        match self {
            DurationUnit::Seconds => raw.parse::<u64>().ok().map(Duration::from_secs),
            DurationUnit::Minutes => {
                let (minutes, seconds) = raw.split_once('.').unwrap_or((raw, "0"));
                if !is_digits(minutes) || !is_digits(seconds) || seconds.len() > 2 {
                    return None;
                }

                let minutes: u64 = minutes.parse().ok()?;
                let seconds: u64 = match seconds.len() {
                    1 => seconds.parse::<u64>().ok()? * 10,
                    _ => seconds.parse().ok()?,
                };
                if seconds >= 60 {
                    return None;
                }
                Some(Duration::from_secs(minutes * 60 + seconds))
            }
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Configuration for reading a catalog file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file path (`~` is expanded)
    pub path: PathBuf,

    /// Separator between the fields of a line
    pub field_delimiter: char,

    /// Separator between genres inside the genre field
    pub genre_delimiter: char,

    /// Unit of the duration field
    pub duration_unit: DurationUnit,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("songs.csv"),
            field_delimiter: ';',
            genre_delimiter: ',',
            duration_unit: DurationUnit::Seconds,
        }
    }
}

impl CatalogConfig {
    /// Create a new configuration for the given catalog file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set the duration unit
    pub fn with_duration_unit(mut self, unit: DurationUnit) -> Self {
        self.duration_unit = unit;
        self
    }

    /// Set field and genre delimiters
    pub fn with_delimiters(mut self, field: char, genre: char) -> Self {
        self.field_delimiter = field;
        self.genre_delimiter = genre;
        self
    }

    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid catalog configuration")
    }

    /// Load a configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog configuration: {:?}", path))?;

        Self::from_toml_str(&text)
            .with_context(|| format!("Failed to load catalog configuration: {:?}", path))
    }

    /// Catalog path with `~` expanded
    pub fn expanded_path(&self) -> PathBuf {
        let raw = self.path.to_string_lossy();
        PathBuf::from(shellexpand::tilde(&raw).into_owned())
    }
}
