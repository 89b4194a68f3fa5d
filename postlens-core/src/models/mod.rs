//! Domain models for `PostLens`.
//!
//! This module contains the core data structures representing an insight
//! request and the aggregate of generated insights. The JSON shape of
//! [`InsightResult`] is the external contract consumed by UI and history
//! collaborators, so the serde field names are part of the model.
//!
//! ## Submodules
//!
//! - [`insight`] - Result types (`InsightResult`, `Sentiment`, `QualityAnalysis`)
//! - [`request`] - Validated request type (`InsightRequest`)

mod insight;
mod request;

// Re-export everything at the models level
pub use insight::{InsightResult, QualityAnalysis, Sentiment, SentimentLabel};
pub use request::InsightRequest;
