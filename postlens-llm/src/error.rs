//! Dispatch error taxonomy and the public processing error.

use thiserror::Error;

// ============================================================================
// Dispatch Error
// ============================================================================

/// Classification attached to a failed completion dispatch.
///
/// The first three variants are recoverable by delegating to the local
/// fallback analyzer; [`Upstream`](Self::Upstream) is not, since no local
/// alternative exists for a provider that is configured but misbehaving.
///
/// This is a returned value, matched on by tag. It is never stringly
/// signalled between layers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No usable credential was found anywhere.
    #[error("No API credential configured")]
    MissingCredential,

    /// The provider rejected the credential.
    #[error("API credential rejected by provider")]
    InvalidCredential,

    /// The provider reports an exhausted balance.
    #[error("Insufficient API credits")]
    InsufficientQuota,

    /// Any other non-success response or network-layer fault.
    #[error("Upstream failure: {0}")]
    Upstream(String),
}

impl DispatchError {
    /// Returns true if this failure should route to the fallback analyzer
    /// instead of surfacing to the caller.
    pub fn triggers_fallback(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential | Self::InvalidCredential | Self::InsufficientQuota
        )
    }
}

impl From<reqwest::Error> for DispatchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}

// ============================================================================
// Process Error
// ============================================================================

/// The single failure kind surfaced to callers of the insight service.
///
/// Internal classifications never cross the service boundary; whatever
/// failed is wrapped here with a descriptive message.
#[derive(Debug, Clone, Error)]
#[error("Failed to process post: {message}")]
pub struct ProcessError {
    message: String,
}

impl ProcessError {
    /// Wraps a descriptive message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The underlying message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<postlens_core::CoreError> for ProcessError {
    fn from(err: postlens_core::CoreError) -> Self {
        Self::new(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
