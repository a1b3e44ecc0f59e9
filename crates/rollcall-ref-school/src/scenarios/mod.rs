//! Reference school demo scenarios.
//!
//! Each scenario is a self-contained module that wires up real Rollcall
//! components (record store, workflow engine, remote-call stub, audit seal)
//! with the reference fixtures and demonstrates one workflow pattern.

use std::future::Future;

use rollcall_contracts::error::{RollcallError, RollcallResult};
use rollcall_engine::{ApprovalWorkflowEngine, EngineConfig, RecordStore};
use rollcall_remote::{FaultPolicy, StubRemoteCall};

pub mod approval_day;
pub mod partial_submission;
pub mod rollback_window;

/// How many times a scenario re-issues an operation after a transient
/// remote failure before giving up.
const MAX_ATTEMPTS: usize = 5;

/// Build an engine over `store` with the given remote fault policy and the
/// engine settings from the embedded demo TOML.
pub(crate) fn demo_engine(
    store: RecordStore,
    policy: FaultPolicy,
) -> RollcallResult<ApprovalWorkflowEngine> {
    let config = EngineConfig::from_toml_str(crate::DEMO_CONFIG)?;
    Ok(ApprovalWorkflowEngine::new(
        store,
        Box::new(StubRemoteCall::new(policy)),
        config,
    ))
}

/// The remote fault policy from the embedded demo TOML.
pub(crate) fn demo_fault_policy() -> RollcallResult<FaultPolicy> {
    FaultPolicy::from_toml_str(crate::DEMO_CONFIG)
}

/// Re-issue `op` while it fails transiently, up to `MAX_ATTEMPTS` times.
///
/// This is the caller-side recovery the engine's failure semantics expect:
/// a `TransientRemote` error guarantees the store is unchanged, so the same
/// call can simply be repeated. Guard violations are never retried.
pub(crate) async fn with_retry<T, F, Fut>(label: &str, mut op: F) -> RollcallResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = RollcallResult<T>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < MAX_ATTEMPTS => {
                println!("  {} hit a transient failure (attempt {}), retrying...", label, attempt);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Map an expected guard violation to its message, failing on anything else.
pub(crate) fn expect_guard_violation(result: RollcallResult<impl Sized>) -> RollcallResult<String> {
    match result {
        Err(RollcallError::GuardViolation { reason }) => Ok(reason),
        Err(other) => Err(other),
        Ok(_) => Err(RollcallError::GuardViolation {
            reason: "operation unexpectedly succeeded".to_string(),
        }),
    }
}
