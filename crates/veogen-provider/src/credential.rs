//! Access credential handling.
//!
//! The interactive key picker lives in the UI layer; this trait is the seam
//! it plugs into. The backend default reads the key from the environment.

use crate::error::{ProviderError, ProviderResult};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Supplies the access credential for provider calls.
pub trait CredentialProvider: Send + Sync {
    /// Whether a credential is currently available.
    fn has_credential(&self) -> bool;

    /// The credential itself.
    fn credential(&self) -> ProviderResult<String>;

    /// Drop any cached credential state.
    ///
    /// Called by consumers after a [`ProviderError::CredentialRejected`]
    /// so the next run re-resolves the key. The default is a no-op for
    /// sources with nothing cached.
    fn invalidate(&self) {}
}

/// Credential provider backed by the `GEMINI_API_KEY` environment variable.
#[derive(Debug, Clone, Default)]
pub struct EnvCredential;

impl CredentialProvider for EnvCredential {
    fn has_credential(&self) -> bool {
        std::env::var(API_KEY_VAR).map(|v| !v.is_empty()).unwrap_or(false)
    }

    fn credential(&self) -> ProviderResult<String> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(ProviderError::MissingCredential),
        }
    }
}

/// Fixed credential, used in tests and embedding callers that manage keys
/// themselves.
#[derive(Debug, Clone)]
pub struct StaticCredential(String);

impl StaticCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl CredentialProvider for StaticCredential {
    fn has_credential(&self) -> bool {
        !self.0.is_empty()
    }

    fn credential(&self) -> ProviderResult<String> {
        if self.0.is_empty() {
            Err(ProviderError::MissingCredential)
        } else {
            Ok(self.0.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credential() {
        let cred = StaticCredential::new("key-1");
        assert!(cred.has_credential());
        assert_eq!(cred.credential().unwrap(), "key-1");
    }

    #[test]
    fn test_empty_static_credential_is_missing() {
        let cred = StaticCredential::new("");
        assert!(!cred.has_credential());
        assert!(matches!(
            cred.credential(),
            Err(ProviderError::MissingCredential)
        ));
    }
}
