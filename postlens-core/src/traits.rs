//! Trait definitions for PostLens.
//!
//! This module defines the core trait that insight backends must satisfy.

use crate::error::CoreError;
use crate::models::{InsightRequest, InsightResult};

/// Trait for anything that can turn post text into an [`InsightResult`].
///
/// Implementors of this trait are responsible for producing the complete
/// aggregate: every field populated, with documented defaults standing in
/// where a sub-analysis produced nothing usable.
///
/// The local heuristic analyzer implements this without any network access;
/// the LLM-backed service satisfies the same shape at its public boundary.
pub trait InsightAnalyzer: Send + Sync {
    /// A short identifier for this analyzer (used in logs).
    fn name(&self) -> &str;

    /// Analyzes the post and produces the full insight aggregate.
    ///
    /// This may be an async operation involving network requests, or a
    /// purely local computation, depending on the implementor.
    fn analyze(
        &self,
        request: &InsightRequest,
    ) -> impl std::future::Future<Output = Result<InsightResult, CoreError>> + Send;
}
