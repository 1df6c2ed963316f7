//! Song catalog source
//!
//! Reads a delimiter-separated text catalog, one song per line:
//! `title;artist;duration;genre,genre[;release-date]`. Lines that do not fit
//! are skipped. Tracks are produced lazily by [`CatalogReader`].

mod config;
mod query;
mod reader;
mod record;

pub use config::{CatalogConfig, DurationUnit};
pub use query::TrackQuery;
pub use reader::CatalogReader;
pub use record::{parse_line, CatalogRecord};

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;

/// Open the catalog described by `config`
pub fn open(config: &CatalogConfig) -> Result<CatalogReader<BufReader<File>>> {
    let path = config.expanded_path();
    let file = File::open(&path)
        .with_context(|| format!("Failed to open song catalog: {:?}", path))?;

    log::debug!("Reading song catalog from {:?}", path);
    Ok(CatalogReader::new(BufReader::new(file), config.clone()))
}
