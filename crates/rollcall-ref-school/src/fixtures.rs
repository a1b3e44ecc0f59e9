//! Seeded approval records and actor identities for the reference school.
//!
//! All data in this module is hardcoded and fictional. The seed set mirrors
//! the dashboard's reference state: today's record still collecting
//! submissions, yesterday locked with an open rollback window, and the day
//! before locked with its window lapsed.
//!
//! Actor identities are fixed constants; a real deployment sources these
//! from an authenticated session.

use chrono::{DateTime, Duration, Utc};

use rollcall_contracts::{
    audit::AuditEntry,
    record::{Actor, ApprovalRecord},
    status::RecordStatus,
};

/// The administrator who reviews submissions.
pub fn admin() -> Actor {
    Actor::new("Admin User")
}

/// The principal who approves, locks, and rolls back records.
pub fn principal() -> Actor {
    Actor::new("Principal Smith")
}

/// Synthetic actor for engine-generated entries.
pub fn system() -> Actor {
    Actor::new("System")
}

/// The reference seed set, anchored at `now`:
///
/// 1. Today — `PendingReview`, 4 of 6 classes submitted.
/// 2. Yesterday — `Locked` with the full actor trail and a rollback
///    deadline two hours in the future.
/// 3. Two days ago — `Locked`, rollback window lapsed (no deadline).
pub fn seed_records(now: DateTime<Utc>) -> Vec<ApprovalRecord> {
    vec![
        todays_pending(now),
        locked_yesterday(now),
        locked_two_days_ago(now),
    ]
}

fn todays_pending(now: DateTime<Utc>) -> ApprovalRecord {
    let mut record = ApprovalRecord::new(now.date_naive(), 4, 6);
    record.audit_log.push(AuditEntry::new(
        now,
        "Submissions Received",
        system(),
        "4 out of 6 classes submitted attendance data",
    ));
    record
}

fn locked_yesterday(now: DateTime<Utc>) -> ApprovalRecord {
    let opened = now - Duration::hours(24);
    let mut record = ApprovalRecord::new(opened.date_naive(), 6, 6);
    record.status = RecordStatus::Locked;
    record.reviewed_by = Some(admin());
    record.reviewed_at = Some(now - Duration::hours(23));
    record.approved_by = Some(principal());
    record.approved_at = Some(now - Duration::hours(22));
    record.locked_at = Some(now - Duration::hours(21));
    record.rollback_deadline = Some(now + Duration::hours(2));
    record.audit_log = full_trail(opened);
    record
}

fn locked_two_days_ago(now: DateTime<Utc>) -> ApprovalRecord {
    let opened = now - Duration::hours(48);
    let mut record = ApprovalRecord::new(opened.date_naive(), 6, 6);
    record.status = RecordStatus::Locked;
    record.reviewed_by = Some(admin());
    record.reviewed_at = Some(now - Duration::hours(47));
    record.approved_by = Some(principal());
    record.approved_at = Some(now - Duration::hours(46));
    record.locked_at = Some(now - Duration::hours(45));
    record.audit_log = full_trail(opened);
    record
}

/// The standard four-entry trail of a fully processed day, starting at
/// `opened` with the remaining transitions one hour apart.
fn full_trail(opened: DateTime<Utc>) -> Vec<AuditEntry> {
    vec![
        AuditEntry::new(
            opened,
            "All Submissions Received",
            system(),
            "All 6 classes submitted attendance data",
        ),
        AuditEntry::new(
            opened + Duration::hours(1),
            "Review Completed",
            admin(),
            "Data reviewed and validated",
        ),
        AuditEntry::new(
            opened + Duration::hours(2),
            "Approved",
            principal(),
            "Attendance data approved for government submission",
        ),
        AuditEntry::new(
            opened + Duration::hours(3),
            "Locked",
            principal(),
            "Data locked and marked as official",
        ),
    ]
}
