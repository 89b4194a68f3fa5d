// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `PostLens` Core
//!
//! Core types, models, and traits for the `PostLens` application.
//!
//! This crate provides the foundational abstractions used across all other
//! `PostLens` crates, including:
//!
//! - Domain models (insight requests and results)
//! - Error types
//! - The analyzer trait satisfied by every insight backend
//!
//! ## Key Types
//!
//! - [`InsightRequest`] - Validated post text to analyze
//! - [`InsightResult`] - The full aggregate of generated insights
//! - [`Sentiment`] / [`SentimentLabel`] - Sentiment sub-result
//! - [`QualityAnalysis`] - Quality sub-result (flattened into the aggregate)
//! - [`InsightAnalyzer`] - Trait for anything that can produce an
//!   [`InsightResult`] from post text

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{InsightRequest, InsightResult, QualityAnalysis, Sentiment, SentimentLabel};

// Re-export traits
pub use traits::InsightAnalyzer;
