//! Error taxonomy for the Rollcall workflow engine.
//!
//! All fallible operations return `RollcallResult<T>`. The variants split
//! cleanly along retryability: a `TransientRemote` failure leaves the record
//! unchanged and the same call may simply be re-issued, while everything
//! else requires some external state to change first.

use thiserror::Error;

/// The unified error type for the Rollcall workflow crates.
#[derive(Debug, Error)]
pub enum RollcallError {
    /// A transition was attempted from the wrong state, or its precondition
    /// failed (not all classes submitted, rollback window expired, ...).
    ///
    /// Never retried automatically; the record is untouched.
    #[error("transition guard violated: {reason}")]
    GuardViolation { reason: String },

    /// The remote call stub reported a (simulated) network failure.
    ///
    /// The record is guaranteed unchanged; re-invoking the same operation
    /// is safe and is the expected recovery path.
    #[error("remote call '{operation}' failed: {reason}")]
    TransientRemote { operation: String, reason: String },

    /// The referenced record does not exist in the store — a stale reference.
    #[error("approval record '{record_id}' not found")]
    NotFound { record_id: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The record store's mutex was poisoned.
    ///
    /// Cannot happen under normal operation; mapped rather than unwrapped so
    /// a panicked test thread cannot cascade.
    #[error("record store poisoned: {reason}")]
    StorePoisoned { reason: String },
}

impl RollcallError {
    /// True when re-invoking the failed operation unchanged may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RollcallError::TransientRemote { .. })
    }
}

/// Convenience alias used throughout the Rollcall crates.
pub type RollcallResult<T> = Result<T, RollcallError>;
