//! Record status variants and the centralized display-metadata mapping.
//!
//! `RecordStatus` is what the store persists — exactly four variants.
//! `DisplayStatus` adds the derived fifth condition (`RollbackAvailable`)
//! that views badge differently but which is never stored: it is computed
//! from a locked record's rollback deadline at render time.
//!
//! Every view selects badges and icons through `DisplayStatus::display()`,
//! so there is exactly one mapping table in the codebase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::ApprovalRecord;

/// The persisted lifecycle state of an approval record.
///
/// Transition order: `PendingReview → Reviewed → Approved → Locked`,
/// with `rollback` returning a locked record to `PendingReview` while its
/// rollback window is open. No other value is ever observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    PendingReview,
    Reviewed,
    Approved,
    Locked,
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display().label)
    }
}

/// What a view should render for a record: the four persisted states plus
/// the derived rollback-available condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStatus {
    PendingReview,
    Reviewed,
    Approved,
    Locked,
    /// Locked, but still inside the rollback window.
    RollbackAvailable,
}

impl DisplayStatus {
    /// Derive the display condition for `record` at instant `now`.
    pub fn of(record: &ApprovalRecord, now: DateTime<Utc>) -> Self {
        if record.rollback_available(now) {
            return DisplayStatus::RollbackAvailable;
        }
        match record.status {
            RecordStatus::PendingReview => DisplayStatus::PendingReview,
            RecordStatus::Reviewed => DisplayStatus::Reviewed,
            RecordStatus::Approved => DisplayStatus::Approved,
            RecordStatus::Locked => DisplayStatus::Locked,
        }
    }
}

/// The badge color family a view should use for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Warning,
    Info,
    Primary,
    Success,
    Destructive,
}

/// Display metadata for one status: label text, badge tone, icon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: &'static str,
    pub badge: BadgeTone,
    pub icon: &'static str,
}

impl RecordStatus {
    /// Display metadata for a persisted status (rollback window ignored).
    pub fn display(&self) -> StatusDisplay {
        match self {
            RecordStatus::PendingReview => DisplayStatus::PendingReview,
            RecordStatus::Reviewed => DisplayStatus::Reviewed,
            RecordStatus::Approved => DisplayStatus::Approved,
            RecordStatus::Locked => DisplayStatus::Locked,
        }
        .display()
    }
}

impl DisplayStatus {
    /// The single status → display-metadata table.
    pub fn display(&self) -> StatusDisplay {
        match self {
            DisplayStatus::PendingReview => StatusDisplay {
                label: "Pending Review",
                badge: BadgeTone::Warning,
                icon: "clock",
            },
            DisplayStatus::Reviewed => StatusDisplay {
                label: "Reviewed",
                badge: BadgeTone::Info,
                icon: "eye",
            },
            DisplayStatus::Approved => StatusDisplay {
                label: "Approved",
                badge: BadgeTone::Primary,
                icon: "check-circle",
            },
            DisplayStatus::Locked => StatusDisplay {
                label: "Locked",
                badge: BadgeTone::Success,
                icon: "lock",
            },
            DisplayStatus::RollbackAvailable => StatusDisplay {
                label: "Rollback Available",
                badge: BadgeTone::Destructive,
                icon: "rotate-ccw",
            },
        }
    }
}
