//! Network configuration shared by all endpoints

use std::collections::BTreeMap;

use url::Url;

/// Base URL plus headers and query parameters applied to every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    base_url: Url,
    headers: BTreeMap<String, String>,
    query_parameters: BTreeMap<String, String>,
}

impl NetworkConfig {
    /// Creates a configuration with no default headers or query parameters.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            headers: BTreeMap::new(),
            query_parameters: BTreeMap::new(),
        }
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds a query parameter appended to every request URL.
    #[must_use]
    pub fn with_query_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_parameters.insert(name.into(), value.into());
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the default headers.
    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Returns the default query parameters.
    #[must_use]
    pub const fn query_parameters(&self) -> &BTreeMap<String, String> {
        &self.query_parameters
    }
}
