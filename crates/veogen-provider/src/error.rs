//! Provider error types.

use thiserror::Error;

use crate::wire::ApiErrorEnvelope;

pub type ProviderResult<T> = Result<T, ProviderError>;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Access credential rejected: {0}")]
    CredentialRejected(String),

    #[error("No access credential available")]
    MissingCredential,

    #[error("Provider response carried no content")]
    EmptyResponse,

    #[error("Failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid download location: {0}")]
    InvalidLocation(String),
}

impl ProviderError {
    /// Classify a non-success API response into a structured error.
    ///
    /// The provider signals a rejected API key either with a 403, a
    /// PERMISSION_DENIED status, or an "entity ... not found" message on the
    /// key lookup. All three map to [`ProviderError::CredentialRejected`] so
    /// callers can invalidate cached credentials by matching on the kind
    /// instead of sniffing message text.
    pub fn from_api_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ApiErrorEnvelope>(body).ok();
        let message = parsed
            .as_ref()
            .map(|e| e.error.message.clone())
            .unwrap_or_else(|| body.trim().to_string());
        let api_status = parsed.and_then(|e| e.error.status);

        let lowered = message.to_lowercase();
        let entity_not_found = lowered.contains("entity") && lowered.contains("not found");
        let permission_denied = status == 403
            || api_status.as_deref() == Some("PERMISSION_DENIED")
            || lowered.contains("api key not valid");

        if permission_denied || entity_not_found {
            ProviderError::CredentialRejected(message)
        } else {
            ProviderError::Api { status, message }
        }
    }

    /// Whether this failure means the access credential itself was rejected.
    pub fn is_credential_rejected(&self) -> bool {
        matches!(
            self,
            ProviderError::CredentialRejected(_) | ProviderError::MissingCredential
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_maps_to_credential_rejected() {
        let body = r#"{"error":{"code":403,"message":"The caller does not have permission","status":"PERMISSION_DENIED"}}"#;
        let err = ProviderError::from_api_response(403, body);
        assert!(err.is_credential_rejected());
    }

    #[test]
    fn test_entity_not_found_maps_to_credential_rejected() {
        // The provider reports an unknown API key as a missing entity.
        let body = r#"{"error":{"code":404,"message":"Requested entity was not found.","status":"NOT_FOUND"}}"#;
        let err = ProviderError::from_api_response(404, body);
        assert!(err.is_credential_rejected());
    }

    #[test]
    fn test_other_errors_stay_api_errors() {
        let body = r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#;
        let err = ProviderError::from_api_response(429, body);
        assert!(!err.is_credential_rejected());
        match err {
            ProviderError::Api { status, message } => {
                assert_eq!(status, 429);
                assert!(message.contains("exhausted"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_body_falls_back_to_raw_text() {
        let err = ProviderError::from_api_response(500, "internal blowup");
        match err {
            ProviderError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "internal blowup");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }
}
