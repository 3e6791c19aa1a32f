// ── Runtime configuration ──
//
// Describes where the backend lives and how patient the transport
// should be. Built by the app shell and handed in -- core never reads
// config files.

use std::time::Duration;

use url::Url;

/// Configuration for connecting to the VoltSwap backend.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend root URL (e.g. `https://api.voltswap.vn`).
    pub base_url: Url,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.voltswap.vn"
                .parse()
                .expect("default URL is valid"),
            timeout: Duration::from_secs(30),
        }
    }
}
