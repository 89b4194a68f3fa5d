//! Fallback gate.
//!
//! [`InsightService`] is the public entry point of the crate. It wraps the
//! orchestrator and routes failures by classification: credential and quota
//! failures delegate the whole request to the local fallback analyzer, any
//! other failure surfaces as a wrapped [`ProcessError`]. The internal
//! [`DispatchError`] taxonomy never crosses this boundary.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use postlens_core::{InsightAnalyzer, InsightRequest, InsightResult};

use crate::dispatch::{CompletionBackend, HttpCompletionBackend};
use crate::error::{DispatchError, ProcessError};
use crate::orchestrator::InsightOrchestrator;
use crate::settings::LlmSettings;

// ============================================================================
// Insight Service
// ============================================================================

/// The insight processing service: orchestration plus fallback routing.
///
/// Never fails for credential or quota reasons; those cases are answered by
/// the fallback analyzer instead.
pub struct InsightService<F: InsightAnalyzer> {
    orchestrator: InsightOrchestrator,
    fallback: F,
}

impl<F: InsightAnalyzer> InsightService<F> {
    /// Creates a service over an explicit backend.
    pub fn new(backend: Arc<dyn CompletionBackend>, fallback: F) -> Self {
        Self {
            orchestrator: InsightOrchestrator::new(backend),
            fallback,
        }
    }

    /// Creates a service over the HTTP backend with the given settings
    /// snapshot.
    pub fn with_settings(settings: LlmSettings, fallback: F) -> Self {
        Self::new(Arc::new(HttpCompletionBackend::new(settings)), fallback)
    }

    /// Creates a service over the HTTP backend, reading settings from the
    /// environment once, now.
    pub fn from_env(fallback: F) -> Self {
        Self::with_settings(LlmSettings::from_env(), fallback)
    }

    /// Processes one post into the full insight aggregate.
    ///
    /// Recoverable failures (missing/invalid credential, exhausted quota)
    /// abandon all partial results and delegate entirely to the fallback
    /// analyzer. Anything else surfaces as a [`ProcessError`].
    #[instrument(skip(self, request))]
    pub async fn process(&self, request: &InsightRequest) -> Result<InsightResult, ProcessError> {
        match self.orchestrator.run(request).await {
            Ok(result) => Ok(result),
            Err(error) if error.triggers_fallback() => {
                info!(
                    reason = %error,
                    analyzer = self.fallback.name(),
                    "Remote provider unusable, delegating to local analyzer"
                );
                self.fallback
                    .analyze(request)
                    .await
                    .map_err(ProcessError::from)
            }
            Err(DispatchError::Upstream(message)) => {
                warn!(error = %message, "Upstream failure, surfacing to caller");
                Err(ProcessError::new(message))
            }
            Err(error) => Err(ProcessError::new(error.to_string())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
