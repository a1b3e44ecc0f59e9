//! Audit trail entry type.
//!
//! One `AuditEntry` per committed transition, appended to the owning
//! record's `audit_log`. Entries are immutable once appended; the engine
//! never rewrites, reorders, or drops them. Failed transition attempts
//! produce no entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::Actor;

/// An immutable log line describing one committed transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Wall-clock time (UTC) the transition committed.
    pub timestamp: DateTime<Utc>,
    /// Human-readable transition label, e.g. "Review Completed", "Locked".
    pub action: String,
    /// Who performed the transition.
    pub user: Actor,
    /// Free text: the caller's notes/reason, or a standard description.
    pub details: String,
}

impl AuditEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        action: impl Into<String>,
        user: Actor,
        details: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            action: action.into(),
            user,
            details: details.into(),
        }
    }
}
