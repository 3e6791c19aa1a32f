// voltswap-api: Async HTTP client for the VoltSwap backend REST API.

pub mod client;
pub mod credentials;
pub mod error;
pub mod transport;

mod endpoints;

pub use client::ApiClient;
pub use credentials::{CredentialSource, MemoryCredentials};
pub use error::Error;
pub use transport::TransportConfig;
