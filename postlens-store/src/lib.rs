// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `PostLens` Store
//!
//! Insight history persistence for the `PostLens` application.
//!
//! The store is an opaque append/list/delete collaborator: the processing
//! core never consults it, callers append results after processing and list
//! them later. History is bounded and persisted as a JSON file under the
//! platform config directory.
//!
//! ## Key Types
//!
//! - [`InsightHistory`] - Bounded, ordered history of analyzed posts
//! - [`HistoryEntry`] - One analyzed post with its result and timestamp
//! - [`StoreError`] - Store failure type

pub mod error;
pub mod history;
pub mod persistence;

pub use error::StoreError;
pub use history::{HistoryEntry, InsightHistory};
pub use persistence::{default_config_dir, default_history_path, load_json, save_json};
