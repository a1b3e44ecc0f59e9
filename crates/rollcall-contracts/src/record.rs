//! Approval record and actor types.
//!
//! An `ApprovalRecord` is the unit the whole workflow revolves around: one
//! per calendar day, created once any class submits attendance data, and
//! mutated exclusively through the engine's transition operations.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::audit::AuditEntry;
use crate::status::RecordStatus;

/// Unique identifier for one day's approval record.
///
/// Appears in every audit seal and error message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub uuid::Uuid);

impl RecordId {
    /// Create a new, unique record ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity performing a transition, as supplied by the caller.
///
/// The engine does not authenticate actors — the presentation layer is
/// responsible for sourcing this from a session. Fixtures use constant
/// identities ("Admin User", "Principal Smith", "System").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor(pub String);

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One calendar day's attendance-approval record.
///
/// Field presence tracks the state machine: the `reviewed_*`, `approved_*`
/// and `locked_at` pairs are set by their transitions and cleared together
/// on rollback. `rollback_deadline` is set at approval time and defines the
/// window during which a locked record may still be rolled back.
///
/// `audit_log` is append-only: insertion order is chronological order, and
/// entries are never reordered, rewritten, or truncated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalRecord {
    pub id: RecordId,
    /// The calendar day this record governs. One record per day.
    pub date: NaiveDate,
    pub status: RecordStatus,
    /// How many classes have submitted attendance data for this day.
    pub submitted_classes: u32,
    /// Total number of classes expected to submit.
    pub total_classes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<Actor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<Actor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_at: Option<DateTime<Utc>>,
    /// End of the rollback window. Set when the record is approved, cleared
    /// on rollback. A locked record with no deadline can never be rolled back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollback_deadline: Option<DateTime<Utc>>,
    /// Free-text annotation attached at review or approval time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub audit_log: Vec<AuditEntry>,
}

impl ApprovalRecord {
    /// Create a fresh record in `PendingReview` with an empty audit log.
    ///
    /// Count validation (`submitted <= total`) and the initial "submissions
    /// received" audit entry are the store's responsibility when it opens a
    /// day, so this constructor stays infallible.
    pub fn new(date: NaiveDate, submitted_classes: u32, total_classes: u32) -> Self {
        Self {
            id: RecordId::new(),
            date,
            status: RecordStatus::PendingReview,
            submitted_classes,
            total_classes,
            reviewed_by: None,
            reviewed_at: None,
            approved_by: None,
            approved_at: None,
            locked_at: None,
            rollback_deadline: None,
            notes: None,
            audit_log: Vec::new(),
        }
    }

    /// True when every expected class has submitted attendance data.
    ///
    /// This is the guard for the `review` transition.
    pub fn all_classes_submitted(&self) -> bool {
        self.submitted_classes == self.total_classes
    }

    /// True when the record may still be rolled back at instant `now`:
    /// it is locked and its rollback deadline has not yet passed.
    pub fn rollback_available(&self, now: DateTime<Utc>) -> bool {
        self.status == RecordStatus::Locked
            && self.rollback_deadline.is_some_and(|deadline| now < deadline)
    }
}
