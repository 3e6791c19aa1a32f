// Shared transport configuration for building the backend HTTP client.
//
// One configured `reqwest::Client` is the single transport for every
// request the app makes; the timeout and user agent are fixed here so
// callers cannot accidentally build a second, differently-tuned client.

use std::time::Duration;

use crate::error::Error;

/// Transport settings shared by every request.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Upper bound on a single request, connect to last body byte.
    /// A request that exceeds it surfaces as [`Error::Timeout`], never
    /// as a plain network error.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("voltswap-app/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(Error::Network)
    }
}
