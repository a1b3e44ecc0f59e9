//! Collaborator trait definitions for the approval workflow engine.
//!
//! Two seams connect the engine to the outside world:
//!
//! - `RemoteCall`        — the asynchronous backend boundary every transition
//!                         crosses before it commits
//! - `SubmissionSource`  — read-only provider of per-day class submission
//!                         counts, consulted when a day's record is opened
//!
//! The engine never mutates a record until the remote call has resolved
//! successfully, so a `RemoteCall` failure always leaves the store unchanged.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use rollcall_contracts::error::RollcallResult;

/// The asynchronous backend boundary for transition operations.
///
/// Implementations simulate (or eventually perform) the server round-trip:
/// latency, then either a response payload or a transient failure. The
/// engine awaits exactly one `invoke` per transition, between validating
/// the guard and committing the mutation.
#[async_trait]
pub trait RemoteCall: Send + Sync {
    /// Perform the named operation with a JSON payload.
    ///
    /// Returns `Err(TransientRemote)` on (simulated) network failure; the
    /// caller may retry the same operation since no state has changed.
    async fn invoke(&self, operation: &str, payload: Value) -> RollcallResult<Value>;
}

/// Read-only provider of class submission counts for a calendar day.
///
/// Returns `(submitted, total)`. The engine uses this when opening a day's
/// record; the review guard afterwards reads the counts stored on the
/// record itself.
pub trait SubmissionSource: Send + Sync {
    fn submission_counts(&self, date: NaiveDate) -> (u32, u32);
}
