//! Run configuration and defaults.

use std::path::PathBuf;

use crate::selection::SelectionCriteria;

/// Web-fonts directory endpoint; the API key is appended verbatim.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/webfonts/v1/webfonts?key=";

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "fonts";

/// Pattern that matches any field value.
pub const MATCH_ANY: &str = ".*";

/// Extension of every written font file.
pub const FONT_EXTENSION: &str = "ttf";

/// Everything a single run needs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Opaque API credential.
    pub api_key: String,
    pub endpoint: String,
    pub output_dir: PathBuf,
    pub criteria: SelectionCriteria,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            criteria: SelectionCriteria::default(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_criteria(mut self, criteria: SelectionCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Full catalogue URL: endpoint followed by the API key.
    pub fn catalogue_url(&self) -> String {
        format!("{}{}", self.endpoint, self.api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_url() {
        let config = Config::new("0123456789abcdef");
        assert_eq!(
            config.catalogue_url(),
            "https://www.googleapis.com/webfonts/v1/webfonts?key=0123456789abcdef"
        );
    }

    #[test]
    fn test_defaults() {
        let config = Config::new("key");
        assert_eq!(config.output_dir, PathBuf::from("fonts"));
        assert_eq!(config.criteria, SelectionCriteria::default());
    }

    #[test]
    fn test_builder() {
        let config = Config::new("k")
            .with_endpoint("http://localhost/fonts?key=")
            .with_output_dir("out");
        assert_eq!(config.catalogue_url(), "http://localhost/fonts?key=k");
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }
}
