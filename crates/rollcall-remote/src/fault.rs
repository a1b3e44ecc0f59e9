//! Configurable fault-injection policy for the remote-call stub.
//!
//! One policy object controls both latency and failure behavior, so a
//! deployment swaps between realistic simulation and deterministic test
//! behavior by constructing a different `FaultPolicy` — call sites never
//! wrap their own randomness around the boundary.

use std::path::Path;

use serde::Deserialize;

use rollcall_contracts::error::{RollcallError, RollcallResult};

/// Latency range and failure probability for the stubbed backend.
///
/// ```toml
/// [remote]
/// latency_ms_min = 400
/// latency_ms_max = 1100
/// failure_rate = 0.1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FaultPolicy {
    /// Lower bound of the uniform latency distribution, in milliseconds.
    pub latency_ms_min: u64,
    /// Upper bound (exclusive) of the latency distribution, in milliseconds.
    pub latency_ms_max: u64,
    /// Independent probability that any single call fails transiently.
    pub failure_rate: f64,
}

impl Default for FaultPolicy {
    /// The reference simulation profile: 400–1100 ms latency, 10% failures.
    fn default() -> Self {
        Self {
            latency_ms_min: 400,
            latency_ms_max: 1100,
            failure_rate: 0.1,
        }
    }
}

/// Wrapper matching the `[remote]` section of the shared config document.
#[derive(Debug, Default, Deserialize)]
struct RemoteSection {
    #[serde(default)]
    remote: FaultPolicy,
}

impl FaultPolicy {
    /// A zero-fault policy: no latency, no failures.
    ///
    /// Use in tests and deterministic builds so every remote call resolves
    /// immediately and successfully.
    pub fn none() -> Self {
        Self {
            latency_ms_min: 0,
            latency_ms_max: 0,
            failure_rate: 0.0,
        }
    }

    /// Parse the `[remote]` section out of a shared TOML document.
    ///
    /// A document without a `[remote]` section yields the default policy.
    pub fn from_toml_str(s: &str) -> RollcallResult<Self> {
        let section: RemoteSection = toml::from_str(s).map_err(|e| RollcallError::ConfigError {
            reason: format!("failed to parse remote config TOML: {}", e),
        })?;
        section.remote.validate()?;
        Ok(section.remote)
    }

    /// Read the file at `path` and parse its `[remote]` section.
    pub fn from_file(path: &Path) -> RollcallResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RollcallError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check the policy's internal consistency.
    pub fn validate(&self) -> RollcallResult<()> {
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(RollcallError::ConfigError {
                reason: format!("failure_rate {} is not within 0.0..=1.0", self.failure_rate),
            });
        }
        if self.latency_ms_min > self.latency_ms_max {
            return Err(RollcallError::ConfigError {
                reason: format!(
                    "latency_ms_min {} exceeds latency_ms_max {}",
                    self.latency_ms_min, self.latency_ms_max
                ),
            });
        }
        Ok(())
    }
}
