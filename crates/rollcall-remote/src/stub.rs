//! The simulated remote-call boundary.
//!
//! `StubRemoteCall` stands in for the real backend: every `invoke` sleeps
//! for a uniformly sampled latency, then either echoes the payload back
//! with timing metadata or fails with a transient error, per its
//! `FaultPolicy`. Replace the implementation behind the `RemoteCall` trait
//! with real fetch calls later.

use async_trait::async_trait;
use rand::Rng;
use serde_json::{json, Value};
use tokio::time::{sleep, Duration};
use tracing::debug;

use rollcall_contracts::error::{RollcallError, RollcallResult};
use rollcall_engine::traits::RemoteCall;

use crate::fault::FaultPolicy;

/// A `RemoteCall` implementation with simulated latency and failure.
pub struct StubRemoteCall {
    policy: FaultPolicy,
}

impl StubRemoteCall {
    pub fn new(policy: FaultPolicy) -> Self {
        Self { policy }
    }

    /// A stub that resolves instantly and never fails.
    pub fn reliable() -> Self {
        Self::new(FaultPolicy::none())
    }
}

#[async_trait]
impl RemoteCall for StubRemoteCall {
    /// Simulate one backend round-trip.
    ///
    /// Latency is uniform over `[latency_ms_min, latency_ms_max)`, and each
    /// call fails independently with probability `failure_rate`. Both are
    /// sampled before the sleep so the thread-local RNG is never held
    /// across the await.
    async fn invoke(&self, operation: &str, payload: Value) -> RollcallResult<Value> {
        let (latency_ms, failed) = {
            let mut rng = rand::thread_rng();
            let latency_ms = if self.policy.latency_ms_max > self.policy.latency_ms_min {
                rng.gen_range(self.policy.latency_ms_min..self.policy.latency_ms_max)
            } else {
                self.policy.latency_ms_min
            };
            let failed = self.policy.failure_rate > 0.0
                && rng.gen::<f64>() < self.policy.failure_rate;
            (latency_ms, failed)
        };

        debug!(operation, latency_ms, failed, "stub remote call dispatched");

        if latency_ms > 0 {
            sleep(Duration::from_millis(latency_ms)).await;
        }

        if failed {
            return Err(RollcallError::TransientRemote {
                operation: operation.to_string(),
                reason: "simulated network error".to_string(),
            });
        }

        Ok(json!({
            "data": payload,
            "meta": { "duration_ms": latency_ms }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn zero_fault_policy_always_succeeds() {
        let stub = StubRemoteCall::reliable();
        for _ in 0..50 {
            let response = stub
                .invoke("approval.review", json!({ "record_id": "r-1" }))
                .await
                .unwrap();
            assert_eq!(response["data"]["record_id"], "r-1");
            assert_eq!(response["meta"]["duration_ms"], 0);
        }
    }

    #[tokio::test]
    async fn certain_failure_policy_always_fails_transiently() {
        let stub = StubRemoteCall::new(FaultPolicy {
            latency_ms_min: 0,
            latency_ms_max: 0,
            failure_rate: 1.0,
        });
        for _ in 0..50 {
            let err = stub.invoke("approval.lock", json!({})).await.unwrap_err();
            assert!(err.is_retryable());
            assert!(err.to_string().contains("approval.lock"));
        }
    }

    #[tokio::test]
    async fn latency_stays_within_the_configured_range() {
        let stub = StubRemoteCall::new(FaultPolicy {
            latency_ms_min: 1,
            latency_ms_max: 5,
            failure_rate: 0.0,
        });
        let response = stub.invoke("approval.approve", json!({})).await.unwrap();
        let duration = response["meta"]["duration_ms"].as_u64().unwrap();
        assert!((1..5).contains(&duration));
    }
}
