//! TOML-loaded engine configuration.
//!
//! The engine reads its settings from the same TOML document the rest of
//! the deployment uses; unknown sections (e.g. `[remote]`, owned by the
//! stub crate) are ignored here.

use std::path::Path;

use serde::Deserialize;

use rollcall_contracts::error::{RollcallError, RollcallResult};

/// Workflow settings for the approval engine.
///
/// ```toml
/// rollback_window_hours = 24
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Length of the rollback window, anchored at approval time.
    ///
    /// A locked record may be rolled back until `approved_at` plus this
    /// many hours; after that it is permanently immutable.
    pub rollback_window_hours: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rollback_window_hours: 24,
        }
    }
}

impl EngineConfig {
    /// Parse `s` as a TOML document and extract the engine settings.
    ///
    /// Returns `RollcallError::ConfigError` if the TOML is malformed or a
    /// field has the wrong type.
    pub fn from_toml_str(s: &str) -> RollcallResult<Self> {
        toml::from_str(s).map_err(|e| RollcallError::ConfigError {
            reason: format!("failed to parse engine config TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as engine configuration.
    pub fn from_file(path: &Path) -> RollcallResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RollcallError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }
}
