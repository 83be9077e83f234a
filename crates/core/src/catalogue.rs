//! Font catalogue retrieval and shape validation.
//!
//! The directory API is third-party, so anything that does not look like the
//! expected catalogue is rejected before it can reach filename generation.

use std::{collections::BTreeSet, fmt};

use indexmap::IndexMap;
use log::info;
use serde::Deserialize;

use crate::{
    error::{Error, Result},
    http::Fetch,
};

/// One font family as listed by the directory API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontRecord {
    pub family: String,
    pub variants: Vec<String>,
    pub subsets: Vec<String>,
    pub category: String,
    pub kind: String,
    /// Variant name to download URL, in upstream order.
    pub files: IndexMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct CatalogueResponse {
    items: Vec<FontRecord>,
}

/// The validated list of font records from a single fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    records: Vec<FontRecord>,
}

impl Catalogue {
    pub fn new(records: Vec<FontRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[FontRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<FontRecord> {
        self.records
    }

    pub fn stats(&self) -> CatalogueStats {
        let mut variants = BTreeSet::new();
        let mut subsets = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut kinds = BTreeSet::new();
        let mut files = 0;

        for record in &self.records {
            variants.extend(record.variants.iter().map(String::as_str));
            subsets.extend(record.subsets.iter().map(String::as_str));
            categories.insert(record.category.as_str());
            kinds.insert(record.kind.as_str());
            files += record.files.len();
        }

        CatalogueStats {
            families: self.records.len(),
            variants: variants.len(),
            subsets: subsets.len(),
            categories: categories.len(),
            kinds: kinds.len(),
            files,
        }
    }
}

/// Aggregate counts over a catalogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogueStats {
    pub families: usize,
    pub variants: usize,
    pub subsets: usize,
    pub categories: usize,
    pub kinds: usize,
    pub files: usize,
}

impl fmt::Display for CatalogueStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} different font families", self.families)?;
        writeln!(f, "{} different font variants", self.variants)?;
        writeln!(f, "{} different font subsets", self.subsets)?;
        writeln!(f, "{} different font categories", self.categories)?;
        writeln!(f, "{} different font kinds", self.kinds)?;
        write!(f, "Totals {} font files", self.files)
    }
}

/// `files` keys end up in filenames, so they are held to `^[a-z0-9]+$`.
fn is_valid_file_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Parse and validate a catalogue response body.
pub fn parse_catalogue(body: &[u8]) -> Result<Catalogue> {
    let response: CatalogueResponse = serde_json::from_slice(body)?;

    for record in &response.items {
        if let Some(key) = record.files.keys().find(|key| !is_valid_file_key(key)) {
            return Err(Error::SchemaViolation(format!(
                "family {:?} has files key {key:?} not matching ^[a-z0-9]+$",
                record.family
            )));
        }
    }

    Ok(Catalogue::new(response.items))
}

/// GET the catalogue at `url` and validate it.
pub fn fetch_catalogue(fetcher: &impl Fetch, url: &str) -> Result<Catalogue> {
    let body = fetcher.get(url)?;
    let catalogue = parse_catalogue(&body)?;
    info!("Catalogue contains {} families", catalogue.records().len());
    Ok(catalogue)
}
