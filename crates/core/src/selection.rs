//! Pattern-based selection of font files from a catalogue.

use std::fmt;

use log::{debug, warn};
use regex::Regex;

use crate::{
    catalogue::FontRecord,
    config::MATCH_ANY,
    error::{Error, Result},
};

/// Raw patterns for the five record fields.
///
/// Patterns are regular expressions searched anywhere in the value, so
/// `serif` also matches `sans-serif`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCriteria {
    pub family: String,
    pub variants: String,
    pub subsets: String,
    pub category: String,
    pub kind: String,
}

impl Default for SelectionCriteria {
    fn default() -> Self {
        Self {
            family: MATCH_ANY.to_string(),
            variants: MATCH_ANY.to_string(),
            subsets: MATCH_ANY.to_string(),
            category: MATCH_ANY.to_string(),
            kind: MATCH_ANY.to_string(),
        }
    }
}

impl fmt::Display for SelectionCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Family: {}", self.family)?;
        writeln!(f, "Variants: {}", self.variants)?;
        writeln!(f, "Subsets: {}", self.subsets)?;
        writeln!(f, "Category: {}", self.category)?;
        write!(f, "Kind: {}", self.kind)
    }
}

/// One font file to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub family: String,
    pub variant: String,
    pub url: String,
}

/// Compiled [`SelectionCriteria`].
#[derive(Debug, Clone)]
pub struct Selector {
    family: Regex,
    variants: Regex,
    subsets: Regex,
    category: Regex,
    kind: Regex,
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        field,
        pattern: pattern.to_string(),
        source,
    })
}

impl Selector {
    pub fn new(criteria: &SelectionCriteria) -> Result<Self> {
        Ok(Self {
            family: compile("family", &criteria.family)?,
            variants: compile("variants", &criteria.variants)?,
            subsets: compile("subsets", &criteria.subsets)?,
            category: compile("category", &criteria.category)?,
            kind: compile("kind", &criteria.kind)?,
        })
    }

    /// Whether `record` satisfies all five patterns.
    ///
    /// `variants` and `subsets` need at least one matching entry.
    pub fn accepts(&self, record: &FontRecord) -> bool {
        self.family.is_match(&record.family)
            && record.variants.iter().any(|v| self.variants.is_match(v))
            && record.subsets.iter().any(|s| self.subsets.is_match(s))
            && self.category.is_match(&record.category)
            && self.kind.is_match(&record.kind)
    }

    /// Tasks for the `files` entries of `record` whose key matches the
    /// variants pattern. Does not check [`Selector::accepts`].
    ///
    /// `files` keys are matched on their own, so an accepted record can still
    /// yield nothing when its `variants` list and `files` keys disagree.
    pub fn tasks<'a>(&'a self, record: &'a FontRecord) -> impl Iterator<Item = DownloadTask> + 'a {
        record
            .files
            .iter()
            .filter(|(variant, _)| self.variants.is_match(variant))
            .map(|(variant, url)| DownloadTask {
                family: record.family.clone(),
                variant: variant.clone(),
                url: url.clone(),
            })
    }

    /// Tasks for every accepted record, in catalogue order.
    pub fn select(&self, records: &[FontRecord]) -> Vec<DownloadTask> {
        let tasks: Vec<_> = records
            .iter()
            .filter(|record| self.accepts(record))
            .inspect(|record| debug!("Matched {}", record.family))
            .flat_map(|record| self.tasks(record))
            .collect();

        if tasks.is_empty() {
            warn!("No font files match the selection criteria");
        }
        tasks
    }
}

/// Compile `criteria` and select matching files from `records`.
pub fn select(records: &[FontRecord], criteria: &SelectionCriteria) -> Result<Vec<DownloadTask>> {
    Ok(Selector::new(criteria)?.select(records))
}
