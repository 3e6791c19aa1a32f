// VoltSwap backend HTTP client
//
// Wraps `reqwest::Client` with base-URL joining, bearer-token
// attachment, and the `{ success, data, message }` envelope handling
// shared by every backend endpoint. Endpoint modules (stations,
// batteries, etc.) are implemented as inherent methods in separate
// files to keep this module focused on transport mechanics.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::credentials::CredentialSource;
use crate::error::Error;
use crate::transport::TransportConfig;

/// Callback invoked when the backend rejects the session credential.
/// The surrounding navigation layer uses it to route to the sign-in
/// screen; it fires exactly once per detected 401.
pub type UnauthorizedHook = Box<dyn Fn() + Send + Sync>;

/// Uniform response envelope of the VoltSwap backend.
#[derive(Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the VoltSwap backend.
///
/// Single choke point for every outgoing request: resolves paths
/// against the base URL, attaches `Authorization: Bearer <token>` when
/// a credential is present, and runs response-level interception before
/// any caller sees the payload. All methods return the unwrapped `data`
/// value -- the envelope is stripped, and keys stay in the backend's
/// wire convention (underscore-separated); crossing into the client
/// convention is `voltswap-core`'s job.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    credentials: Arc<dyn CredentialSource>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl ApiClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the backend root (e.g. `https://api.voltswap.vn`).
    pub fn new(
        base_url: Url,
        credentials: Arc<dyn CredentialSource>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            timeout: transport.timeout,
            credentials,
            on_unauthorized: None,
        })
    }

    /// Register the unauthenticated-redirect collaborator.
    ///
    /// Invoked exactly once per detected 401, after the stored
    /// credential has been cleared and before the error propagates.
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Box::new(hook));
        self
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for a backend path.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/{}", path.trim_start_matches('/'));
        Url::parse(&full).map_err(Error::InvalidUrl)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a request and return the unwrapped envelope data.
    ///
    /// `headers` are merged over the client defaults, override wins.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: Option<HeaderMap>,
    ) -> Result<Value, Error> {
        let url = self.api_url(path)?;
        debug!(%method, %url, "sending request");

        let mut builder = self.http.request(method, url);
        if let Some(headers) = headers {
            builder = builder.headers(headers);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let resp = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.intercept(resp).await
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Value, Error> {
        self.request(Method::GET, path, None, None).await
    }

    pub(crate) async fn post(&self, path: &str, body: &Value) -> Result<Value, Error> {
        self.request(Method::POST, path, Some(body), None).await
    }

    pub(crate) async fn put(&self, path: &str, body: &Value) -> Result<Value, Error> {
        self.request(Method::PUT, path, Some(body), None).await
    }

    /// Send a multipart POST (file uploads) and unwrap the envelope.
    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Value, Error> {
        let url = self.api_url(path)?;
        debug!(%url, "sending multipart POST");

        let resp = self
            .authorize(self.http.post(url).multipart(form))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.intercept(resp).await
    }

    // ── Cross-cutting concerns ───────────────────────────────────────

    /// Attach `Authorization: Bearer <token>` when a credential is
    /// present. Absence is not an error at this layer.
    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.credentials.token() {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    /// Map a transport failure, keeping timeouts distinct from other
    /// no-response errors.
    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            Error::Network(err)
        }
    }

    /// Run response-level interception, then unwrap the envelope.
    ///
    /// A 401 clears the stored credential and fires the unauthorized
    /// hook before the error propagates -- interception augments the
    /// failure, it never swallows it. Every other non-2xx becomes a
    /// structured [`Error::Status`]; a 2xx with `success: false`
    /// becomes [`Error::Api`].
    async fn intercept(&self, resp: reqwest::Response) -> Result<Value, Error> {
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            self.credentials.clear();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(Error::AuthExpired);
        }

        let body = resp.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let parsed: Option<Value> = serde_json::from_str(&body).ok();
            let message = parsed
                .as_ref()
                .and_then(|v| v.get("message"))
                .and_then(Value::as_str)
                .map(String::from)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_owned()
                });
            return Err(Error::Status {
                status: status.as_u16(),
                message,
                body: parsed,
            });
        }

        let envelope: Envelope = serde_json::from_str(&body).map_err(|e| Error::Decode {
            message: e.to_string(),
            body: body.clone(),
        })?;

        if !envelope.success {
            return Err(Error::Api {
                message: envelope
                    .message
                    .unwrap_or_else(|| "request rejected".to_owned()),
            });
        }

        Ok(envelope.data.unwrap_or(Value::Null))
    }
}
