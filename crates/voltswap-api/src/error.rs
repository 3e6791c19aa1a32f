use thiserror::Error;

/// Top-level error type for the `voltswap-api` crate.
///
/// Covers every failure mode of a backend round trip: transport,
/// timeout, rejected status, expired session, business-level rejection,
/// and malformed payloads. `voltswap-core` maps these into user-facing
/// diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// No usable response (connection refused, DNS failure, TLS, etc.)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Request exceeded the transport's fixed upper bound.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// URL construction failed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Backend ─────────────────────────────────────────────────────
    /// Non-2xx status. `message` comes from the body's `message` field
    /// when the body is JSON, otherwise the HTTP reason phrase.
    #[error("backend returned HTTP {status}: {message}")]
    Status {
        status: u16,
        message: String,
        body: Option<serde_json::Value>,
    },

    /// The session credential was rejected (HTTP 401). By the time this
    /// reaches the caller the stored credential has been cleared and
    /// the unauthorized hook has fired.
    #[error("session expired or credential rejected")]
    AuthExpired,

    /// HTTP 2xx whose envelope carried `success: false`.
    #[error("request rejected by backend: {message}")]
    Api { message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// Body was not the JSON envelope the backend contract promises,
    /// kept raw for debugging.
    #[error("malformed response body: {message}")]
    Decode { message: String, body: String },
}

impl Error {
    /// Returns `true` if re-authentication might resolve this error.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired)
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } => true,
            Self::Status { status, .. } => matches!(status, 429 | 502 | 503 | 504),
            _ => false,
        }
    }

    /// The HTTP status code, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::AuthExpired => Some(401),
            _ => None,
        }
    }
}
