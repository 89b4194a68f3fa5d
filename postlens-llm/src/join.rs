//! Fan-out join primitives.
//!
//! The two failure-tolerance policies used by the orchestrator, as distinct
//! named combinators so each is independently testable:
//!
//! - [`require_all`] - all-or-nothing: the group result exists only if every
//!   member succeeds, and the first observed failure short-circuits the
//!   group, discarding in-flight members.
//! - [`settle_all`] - failure-isolated: every member runs to completion and
//!   each outcome is observed independently; the group itself never fails.

use futures::future::{join_all, try_join_all};
use std::future::Future;

/// Runs the futures concurrently; succeeds only if every member succeeds.
///
/// Short-circuits on the first failure, dropping (and thereby cancelling)
/// the members still in flight. Results are returned in input order.
pub async fn require_all<F, T, E>(futures: Vec<F>) -> Result<Vec<T>, E>
where
    F: Future<Output = Result<T, E>>,
{
    try_join_all(futures).await
}

/// Runs the futures concurrently and waits for every member, failed or not.
///
/// Outcomes are returned in input order; a failing member never affects the
/// others. The call itself always completes once the slowest member does.
pub async fn settle_all<F, T, E>(futures: Vec<F>) -> Vec<Result<T, E>>
where
    F: Future<Output = Result<T, E>>,
{
    join_all(futures).await
}

// ============================================================================
// Tests
// ============================================================================
