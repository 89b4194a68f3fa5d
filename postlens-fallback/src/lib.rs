// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `PostLens` Fallback
//!
//! Local heuristic insight analyzer for the `PostLens` application.
//!
//! [`HeuristicAnalyzer`] produces the same [`InsightResult`] shape as the
//! LLM-backed service without any network access: sentence extraction for
//! summary and main idea, a keyword lexicon for sentiment, hashtag and
//! keyword mining for topics, and structural scoring for quality.
//!
//! The insight service delegates here whenever the remote provider is
//! unusable for credential or quota reasons, so results are deterministic
//! for a given input.
//!
//! [`InsightResult`]: postlens_core::InsightResult

mod analyzer;
mod lexicon;

pub use analyzer::HeuristicAnalyzer;
