// ── Core error types ──
//
// User-facing diagnostics from voltswap-core. Consumers never see raw
// transport errors or JSON parse failures -- the
// `From<voltswap_api::Error>` impl translates them into
// domain-appropriate variants. Clonable so a diagnostic can sit in a
// store's watch channel beside the snapshot it explains.

use thiserror::Error;

/// Unified diagnostic type for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    // ── Transport ────────────────────────────────────────────────────
    #[error("network unreachable: {message}")]
    Network { message: String },

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Backend ──────────────────────────────────────────────────────
    #[error("backend returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("session expired -- sign in again")]
    AuthExpired,

    #[error("request rejected: {message}")]
    Rejected { message: String },

    // ── Data ─────────────────────────────────────────────────────────
    #[error("malformed payload: {message}")]
    Malformed { message: String },

    // ── Internal ─────────────────────────────────────────────────────
    #[error("internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ──────────────────────────

impl From<voltswap_api::Error> for SyncError {
    fn from(err: voltswap_api::Error) -> Self {
        match err {
            voltswap_api::Error::Network(e) => SyncError::Network {
                message: e.to_string(),
            },
            voltswap_api::Error::Timeout { timeout_secs } => SyncError::Timeout { timeout_secs },
            voltswap_api::Error::InvalidUrl(e) => SyncError::Internal(format!("invalid URL: {e}")),
            voltswap_api::Error::Status {
                status, message, ..
            } => SyncError::Status { status, message },
            voltswap_api::Error::AuthExpired => SyncError::AuthExpired,
            voltswap_api::Error::Api { message } => SyncError::Rejected { message },
            voltswap_api::Error::Decode { message, .. } => SyncError::Malformed { message },
        }
    }
}
