//! In-memory [`Fetch`] for unit tests.

use std::{cell::RefCell, collections::HashMap};

use reqwest::StatusCode;

use crate::{
    error::{Error, Result},
    http::Fetch,
};

#[derive(Default)]
pub struct FakeFetcher {
    responses: HashMap<String, Vec<u8>>,
    requests: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn with(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(url.to_string(), body.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetch for FakeFetcher {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Status { url: url.to_string(), status: StatusCode::NOT_FOUND })
    }
}
