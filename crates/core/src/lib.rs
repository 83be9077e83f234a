//! Webfonts Fetch Core - catalogue fetching, selection and download logic.

pub mod catalogue;
pub mod config;
pub mod download;
pub mod error;
pub mod http;
pub mod io;
pub mod pipeline;
pub mod selection;
#[cfg(test)]
pub(crate) mod test_support;

pub use catalogue::{Catalogue, CatalogueStats, FontRecord, fetch_catalogue, parse_catalogue};
pub use config::Config;
pub use download::{DownloadOutcome, DownloadReport, download_all, target_path};
pub use error::{Error, Result};
pub use http::{Fetch, HttpFetcher};
pub use io::{Provisioned, ensure_directory};
pub use pipeline::{RunSummary, list, run};
pub use selection::{DownloadTask, SelectionCriteria, Selector, select};
