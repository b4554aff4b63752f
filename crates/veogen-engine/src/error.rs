//! Engine error types.
//!
//! Each workflow step has its own failure kind; every kind propagates
//! unchanged to the caller. Nothing is retried automatically and no partial
//! result is ever surfaced.

use thiserror::Error;

use veogen_provider::ProviderError;

pub type EngineResult<T> = Result<T, GenerationError>;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No usable access credential available")]
    Credential,

    #[error("Audio analysis failed: {0}")]
    Analysis(#[source] ProviderError),

    #[error("Video job submission failed: {0}")]
    Submission(#[source] ProviderError),

    #[error("Polling the primary operation failed: {0}")]
    Poll(#[source] PollError),

    #[error("Extension step failed: {0}")]
    Extension(#[source] ExtensionError),

    #[error("Operation finished without a resolvable video result")]
    MissingResult,

    #[error("Fetching the generated video failed: {0}")]
    Fetch(#[source] ProviderError),

    #[error("Storing the generated video failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure while waiting on an in-flight operation.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("{0}")]
    Provider(#[source] ProviderError),

    #[error("Operation still pending after {attempts} polls")]
    AttemptsExhausted { attempts: u32 },
}

/// Failure inside the conditional extension step.
#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("submission failed: {0}")]
    Submission(#[source] ProviderError),

    #[error("polling failed: {0}")]
    Poll(#[source] PollError),
}

impl GenerationError {
    /// Whether this failure means the access credential was rejected and the
    /// caller should invalidate its cached credential state.
    pub fn is_credential_rejected(&self) -> bool {
        match self {
            GenerationError::Credential => true,
            GenerationError::Analysis(e)
            | GenerationError::Submission(e)
            | GenerationError::Fetch(e) => e.is_credential_rejected(),
            GenerationError::Poll(p) => p.is_credential_rejected(),
            GenerationError::Extension(ExtensionError::Submission(e)) => {
                e.is_credential_rejected()
            }
            GenerationError::Extension(ExtensionError::Poll(p)) => p.is_credential_rejected(),
            GenerationError::MissingResult | GenerationError::Io(_) => false,
        }
    }
}

impl PollError {
    fn is_credential_rejected(&self) -> bool {
        matches!(self, PollError::Provider(e) if e.is_credential_rejected())
    }
}
