//! Blocking HTTP access behind a small trait.

use log::debug;
use reqwest::blocking::Client;

use crate::error::{Error, Result};

/// Something that can GET a URL and hand back the body.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// [`Fetch`] over a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| Error::Request { url: url.to_string(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { url: url.to_string(), status });
        }

        let bytes = response
            .bytes()
            .map_err(|source| Error::Request { url: url.to_string(), source })?;
        debug!("{} bytes from {url}", bytes.len());
        Ok(bytes.to_vec())
    }
}
