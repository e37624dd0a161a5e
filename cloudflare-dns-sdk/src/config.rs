//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};

/// Production API root.
pub const DEFAULT_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Environment variable holding the API token.
pub const API_TOKEN_ENV: &str = "CLOUDFLARE_API_TOKEN";
/// Environment variable overriding [`DEFAULT_API_BASE`].
pub const API_BASE_ENV: &str = "CLOUDFLARE_API_BASE";

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default total request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`HttpTransport`](crate::HttpTransport).
///
/// The token is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without trailing slash.
    pub base_url: String,
    /// Bearer token with `Zone.DNS` permissions.
    pub api_token: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Configuration against the production API with default timeouts.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            api_token: api_token.into(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Read `CLOUDFLARE_API_TOKEN` and, optionally, `CLOUDFLARE_API_BASE`.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] when the token is unset or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup(API_TOKEN_ENV)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Config(format!("{API_TOKEN_ENV} is not set")))?;

        let config = Self::new(token);
        match lookup(API_BASE_ENV).filter(|b| !b.trim().is_empty()) {
            Some(base) => Ok(config.with_base_url(base.trim())),
            None => Ok(config),
        }
    }

    /// Point the client at another API root (a proxy or a test server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"***")
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
