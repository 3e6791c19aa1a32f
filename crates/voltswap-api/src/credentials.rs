// Session credential storage
//
// The bearer token is issued by the authentication flow (external to
// this crate) and read once per outgoing request. When the backend
// rejects it with a 401, the client invalidates it through this same
// seam.

use std::sync::RwLock;

use secrecy::SecretString;

/// Source of the current session credential.
///
/// `token()` is a synchronous read; `None` means the request goes out
/// unauthenticated, which is not an error at the transport layer.
/// `clear()` invalidates the stored credential.
pub trait CredentialSource: Send + Sync {
    fn token(&self) -> Option<SecretString>;
    fn clear(&self);
}

/// In-memory credential store.
///
/// Holds the token for the lifetime of the process. Persisting it
/// across launches belongs to the surrounding platform layer, which can
/// provide its own [`CredentialSource`].
#[derive(Default)]
pub struct MemoryCredentials {
    token: RwLock<Option<SecretString>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(SecretString::from(token.into()))),
        }
    }

    /// Store a freshly issued token.
    pub fn set(&self, token: impl Into<String>) {
        *self.token.write().expect("credential lock poisoned") =
            Some(SecretString::from(token.into()));
    }
}

impl CredentialSource for MemoryCredentials {
    fn token(&self) -> Option<SecretString> {
        self.token.read().expect("credential lock poisoned").clone()
    }

    fn clear(&self) {
        *self.token.write().expect("credential lock poisoned") = None;
    }
}
