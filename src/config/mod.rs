use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url};

/// The API root URL.
pub const DEFAULT_ENDPOINT: &str = "https://api.aftership.com/v4";

/// Per-client configuration.
///
/// Debug output is a constructor option rather than process-wide state, so
/// two clients in the same process (or parallel tests) never affect each
/// other. When set, request and response bodies are also emitted at debug
/// level; control flow and return values are unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub debug: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: default_endpoint(),
            debug: false,
        }
    }

    /// Point the client at a different API root, e.g. a mock server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_url("endpoint", &self.endpoint)?;
        Ok(())
    }
}
