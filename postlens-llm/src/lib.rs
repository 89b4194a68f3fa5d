// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `PostLens` LLM
//!
//! Insight orchestration and provider resilience for the `PostLens`
//! application.
//!
//! This crate turns one piece of post text into the full insight aggregate
//! by fanning out per-insight chat-completion requests to an
//! OpenAI-compatible endpoint, then degrading to a local analyzer when the
//! provider is unusable for credential or quota reasons.
//!
//! ## Layers
//!
//! - [`settings`] - Explicit configuration snapshot ([`LlmSettings`]),
//!   constructed per call and passed down; nothing below reads the
//!   environment.
//! - [`provider`] - Pure resolution of credentials/overrides into a
//!   [`ProviderConfig`] (endpoint, model, dialect, extra headers).
//! - [`dispatch`] - One chat-completion POST per call, with failures
//!   classified into the [`DispatchError`] taxonomy.
//! - [`parse`] - Per-insight-type extraction of structured values from raw
//!   completion text, with deterministic defaults.
//! - [`join`] - The two fan-out policies: all-or-nothing
//!   ([`require_all`]) and failure-isolated ([`settle_all`]).
//! - [`orchestrator`] - Defines the eight insight tasks and assembles the
//!   result from the essential and secondary groups.
//! - [`gate`] - [`InsightService`], the public entry point that routes
//!   credential/quota failures to the fallback analyzer.
//!
//! ## Example
//!
//! ```ignore
//! use postlens_core::InsightRequest;
//! use postlens_fallback::HeuristicAnalyzer;
//! use postlens_llm::InsightService;
//!
//! let service = InsightService::from_env(HeuristicAnalyzer::new());
//! let request = InsightRequest::new("Shipped our new feature today!")?;
//! let insights = service.process(&request).await?;
//! ```

pub mod dispatch;
pub mod error;
pub mod gate;
pub mod join;
pub mod orchestrator;
pub mod parse;
pub mod provider;
pub mod settings;
pub mod task;

// Errors
pub use error::{DispatchError, ProcessError};

// Configuration & provider resolution
pub use provider::{resolve, ProviderConfig, ProviderKind};
pub use settings::{CredentialCandidate, LlmSettings};

// Dispatch
pub use dispatch::{
    classify_failure, ChatMessage, CompletionBackend, DispatchPolicy, HttpCompletionBackend, Role,
};

// Tasks & orchestration
pub use gate::InsightService;
pub use join::{require_all, settle_all};
pub use orchestrator::InsightOrchestrator;
pub use task::InsightTask;
