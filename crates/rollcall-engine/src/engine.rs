//! The approval workflow engine: the only path that mutates records.
//!
//! The engine enforces the one valid sequence of actions that turns a day's
//! raw submissions into a locked, officially immutable record:
//!
//!   PendingReview → Reviewed → Approved → Locked
//!                      ↑__________________________|  (rollback, while the
//!                                                     window is open)
//!
//! Every transition follows the same three-phase shape:
//!
//! 1. **Pre-validate** — the record must exist, be in the transition's
//!    source state, and satisfy its guard. This happens before the remote
//!    call so an invalid request never pays network latency.
//! 2. **Remote call** — the single await point. A transient failure here
//!    surfaces to the caller with the store untouched.
//! 3. **Commit** — under the store lock, the guard is re-validated (the
//!    record may have changed while the call was in flight; a stale result
//!    is discarded rather than applied) and then the field mutation and the
//!    audit append happen together in the same critical section.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use rollcall_contracts::{
    audit::AuditEntry,
    error::{RollcallError, RollcallResult},
    record::{Actor, ApprovalRecord, RecordId},
    status::RecordStatus,
};

use crate::config::EngineConfig;
use crate::store::RecordStore;
use crate::traits::{RemoteCall, SubmissionSource};

/// Record tallies by status, for dashboard summary cards.
///
/// `rollback_available` counts the subset of `locked` records whose
/// rollback window is still open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryCounts {
    pub pending_review: usize,
    pub reviewed: usize,
    pub approved: usize,
    pub locked: usize,
    pub rollback_available: usize,
}

/// The approval workflow engine.
///
/// Owns the record store; the four transition operations and `open_day`
/// are the only code paths that write to it.
pub struct ApprovalWorkflowEngine {
    store: RecordStore,
    remote: Box<dyn RemoteCall>,
    config: EngineConfig,
}

impl ApprovalWorkflowEngine {
    /// Create an engine over `store`, crossing `remote` on every transition.
    pub fn new(store: RecordStore, remote: Box<dyn RemoteCall>, config: EngineConfig) -> Self {
        Self {
            store,
            remote,
            config,
        }
    }

    // ── Record creation ──────────────────────────────────────────────────────

    /// Open the approval record for `date` from the submission source's
    /// current counts. The record starts in `PendingReview`.
    pub fn open_day(
        &self,
        date: chrono::NaiveDate,
        source: &dyn SubmissionSource,
    ) -> RollcallResult<ApprovalRecord> {
        let (submitted, total) = source.submission_counts(date);
        self.store.open_day(date, submitted, total, Utc::now())
    }

    // ── Transition operations ────────────────────────────────────────────────

    /// Mark the record as reviewed.
    ///
    /// Guard: every class must have submitted attendance data.
    pub async fn review(
        &self,
        record_id: &RecordId,
        actor: &Actor,
        notes: Option<String>,
    ) -> RollcallResult<ApprovalRecord> {
        let payload = json!({ "record_id": record_id.to_string(), "notes": &notes });
        let actor = actor.clone();

        self.transition(
            record_id,
            "approval.review",
            payload,
            |record, _now| {
                expect_status(record, RecordStatus::PendingReview)?;
                if !record.all_classes_submitted() {
                    return Err(format!(
                        "only {} of {} classes have submitted attendance data",
                        record.submitted_classes, record.total_classes
                    ));
                }
                Ok(())
            },
            move |record, now| {
                record.status = RecordStatus::Reviewed;
                record.reviewed_by = Some(actor.clone());
                record.reviewed_at = Some(now);
                record.notes = notes.clone();
                record.audit_log.push(AuditEntry::new(
                    now,
                    "Review Completed",
                    actor.clone(),
                    notes
                        .clone()
                        .unwrap_or_else(|| "Data reviewed and validated".to_string()),
                ));
            },
        )
        .await
    }

    /// Approve a reviewed record for government submission.
    ///
    /// Sets the rollback deadline: approval time plus the configured
    /// window. The deadline is anchored here, not at lock time.
    pub async fn approve(
        &self,
        record_id: &RecordId,
        actor: &Actor,
        notes: Option<String>,
    ) -> RollcallResult<ApprovalRecord> {
        let payload = json!({ "record_id": record_id.to_string(), "notes": &notes });
        let actor = actor.clone();
        let window = Duration::hours(self.config.rollback_window_hours);

        self.transition(
            record_id,
            "approval.approve",
            payload,
            |record, _now| expect_status(record, RecordStatus::Reviewed),
            move |record, now| {
                record.status = RecordStatus::Approved;
                record.approved_by = Some(actor.clone());
                record.approved_at = Some(now);
                record.rollback_deadline = Some(now + window);
                if notes.is_some() {
                    record.notes = notes.clone();
                }
                record.audit_log.push(AuditEntry::new(
                    now,
                    "Approved",
                    actor.clone(),
                    notes.clone().unwrap_or_else(|| {
                        "Attendance data approved for government submission".to_string()
                    }),
                ));
            },
        )
        .await
    }

    /// Lock an approved record, marking the data official.
    pub async fn lock(&self, record_id: &RecordId, actor: &Actor) -> RollcallResult<ApprovalRecord> {
        let payload = json!({ "record_id": record_id.to_string() });
        let actor = actor.clone();

        self.transition(
            record_id,
            "approval.lock",
            payload,
            |record, _now| expect_status(record, RecordStatus::Approved),
            move |record, now| {
                record.status = RecordStatus::Locked;
                record.locked_at = Some(now);
                record.audit_log.push(AuditEntry::new(
                    now,
                    "Locked",
                    actor.clone(),
                    "Data locked and marked as official",
                ));
            },
        )
        .await
    }

    /// Roll a locked record back to `PendingReview` for corrections.
    ///
    /// Guard: the rollback deadline must not have passed. All review,
    /// approval and lock fields are cleared; the audit trail and any
    /// notes are kept.
    pub async fn rollback(
        &self,
        record_id: &RecordId,
        actor: &Actor,
        reason: Option<String>,
    ) -> RollcallResult<ApprovalRecord> {
        let payload = json!({ "record_id": record_id.to_string(), "reason": &reason });
        let actor = actor.clone();

        self.transition(
            record_id,
            "approval.rollback",
            payload,
            |record, now| {
                expect_status(record, RecordStatus::Locked)?;
                match record.rollback_deadline {
                    Some(deadline) if now < deadline => Ok(()),
                    Some(deadline) => Err(format!("rollback window expired at {}", deadline)),
                    None => Err("record has no open rollback window".to_string()),
                }
            },
            move |record, now| {
                record.status = RecordStatus::PendingReview;
                record.reviewed_by = None;
                record.reviewed_at = None;
                record.approved_by = None;
                record.approved_at = None;
                record.locked_at = None;
                record.rollback_deadline = None;
                record.audit_log.push(AuditEntry::new(
                    now,
                    "Rollback Initiated",
                    actor.clone(),
                    reason
                        .clone()
                        .unwrap_or_else(|| "Data unlocked for corrections".to_string()),
                ));
            },
        )
        .await
    }

    /// The shared three-phase transition path: pre-validate, remote call,
    /// re-validate and commit under the store lock.
    async fn transition<G, E>(
        &self,
        record_id: &RecordId,
        operation: &str,
        payload: Value,
        guard: G,
        effect: E,
    ) -> RollcallResult<ApprovalRecord>
    where
        G: Fn(&ApprovalRecord, DateTime<Utc>) -> Result<(), String>,
        E: FnOnce(&mut ApprovalRecord, DateTime<Utc>),
    {
        // Phase 1: fail fast before paying remote latency.
        let record = self.store.get(record_id)?;
        if let Err(reason) = guard(&record, Utc::now()) {
            warn!(record_id = %record_id, operation, %reason, "transition rejected");
            return Err(RollcallError::GuardViolation { reason });
        }

        debug!(record_id = %record_id, operation, "transition pre-validated, invoking remote");

        // Phase 2: the single suspension point. The store lock is NOT held
        // here; a failure leaves every record exactly as it was.
        self.remote.invoke(operation, payload).await?;

        // Phase 3: commit. The guard runs again under the lock so a result
        // that went stale while in flight is discarded, not applied.
        let now = Utc::now();
        let updated = self.store.update(record_id, |record| {
            if let Err(reason) = guard(record, now) {
                warn!(record_id = %record_id, operation, %reason, "stale remote result discarded");
                return Err(RollcallError::GuardViolation { reason });
            }
            effect(record, now);
            Ok(())
        })?;

        info!(
            record_id = %record_id,
            operation,
            status = %updated.status,
            audit_entries = updated.audit_log.len(),
            "transition committed"
        );
        Ok(updated)
    }

    // ── Read-only queries ────────────────────────────────────────────────────

    /// A snapshot of every record, for the presentation layer.
    pub fn snapshot(&self) -> RollcallResult<Vec<ApprovalRecord>> {
        self.store.snapshot()
    }

    /// Look up one record by ID.
    pub fn record(&self, record_id: &RecordId) -> RollcallResult<ApprovalRecord> {
        self.store.get(record_id)
    }

    /// True iff the record is locked and its rollback window is still open.
    pub fn is_rollback_available(&self, record: &ApprovalRecord) -> bool {
        record.rollback_available(Utc::now())
    }

    /// Tally records by status for dashboard summary cards.
    pub fn summary_counts(&self) -> RollcallResult<SummaryCounts> {
        let now = Utc::now();
        let mut counts = SummaryCounts::default();
        for record in self.store.snapshot()? {
            match record.status {
                RecordStatus::PendingReview => counts.pending_review += 1,
                RecordStatus::Reviewed => counts.reviewed += 1,
                RecordStatus::Approved => counts.approved += 1,
                RecordStatus::Locked => {
                    counts.locked += 1;
                    if record.rollback_available(now) {
                        counts.rollback_available += 1;
                    }
                }
            }
        }
        Ok(counts)
    }

    /// The record for the current UTC calendar day, if one has been opened.
    pub fn todays_record(&self) -> RollcallResult<Option<ApprovalRecord>> {
        let today = Utc::now().date_naive();
        Ok(self
            .store
            .snapshot()?
            .into_iter()
            .find(|r| r.date == today))
    }
}

fn expect_status(record: &ApprovalRecord, expected: RecordStatus) -> Result<(), String> {
    if record.status == expected {
        Ok(())
    } else {
        Err(format!(
            "expected status '{}', record is '{}'",
            expected.display().label,
            record.status.display().label
        ))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;

    // ── Remote doubles ───────────────────────────────────────────────────────

    /// A remote boundary that always accepts.
    struct AcceptingRemote;

    #[async_trait]
    impl RemoteCall for AcceptingRemote {
        async fn invoke(&self, operation: &str, _payload: Value) -> RollcallResult<Value> {
            Ok(json!({ "operation": operation, "accepted": true }))
        }
    }

    /// A remote boundary that always fails transiently.
    struct FailingRemote;

    #[async_trait]
    impl RemoteCall for FailingRemote {
        async fn invoke(&self, operation: &str, _payload: Value) -> RollcallResult<Value> {
            Err(RollcallError::TransientRemote {
                operation: operation.to_string(),
                reason: "simulated network error".to_string(),
            })
        }
    }

    /// A remote boundary that commits a competing review through a store
    /// handle while the caller's own call is still in flight.
    struct CompetingRemote {
        store: RecordStore,
        id: RecordId,
    }

    #[async_trait]
    impl RemoteCall for CompetingRemote {
        async fn invoke(&self, operation: &str, _payload: Value) -> RollcallResult<Value> {
            self.store.update(&self.id, |record| {
                record.status = RecordStatus::Reviewed;
                record.reviewed_by = Some(Actor::new("Deputy Head"));
                record.reviewed_at = Some(Utc::now());
                record.audit_log.push(AuditEntry::new(
                    Utc::now(),
                    "Review Completed",
                    Actor::new("Deputy Head"),
                    "Data reviewed and validated".to_string(),
                ));
                Ok(())
            })?;
            Ok(json!({ "operation": operation, "accepted": true }))
        }
    }

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn admin() -> Actor {
        Actor::new("Admin User")
    }

    fn principal() -> Actor {
        Actor::new("Principal Smith")
    }

    fn engine_with(records: Vec<ApprovalRecord>) -> ApprovalWorkflowEngine {
        let store = RecordStore::seeded(records).unwrap();
        ApprovalWorkflowEngine::new(store, Box::new(AcceptingRemote), EngineConfig::default())
    }

    fn fresh_record(submitted: u32, total: u32) -> ApprovalRecord {
        ApprovalRecord::new(day(9), submitted, total)
    }

    /// A locked record with its full actor/timestamp trail, deadline as given.
    fn locked_record(deadline: Option<DateTime<Utc>>) -> ApprovalRecord {
        let now = Utc::now();
        let mut record = ApprovalRecord::new(day(8), 6, 6);
        record.status = RecordStatus::Locked;
        record.reviewed_by = Some(admin());
        record.reviewed_at = Some(now - Duration::hours(3));
        record.approved_by = Some(principal());
        record.approved_at = Some(now - Duration::hours(2));
        record.locked_at = Some(now - Duration::hours(1));
        record.rollback_deadline = deadline;
        record.notes = Some("Verified against class registers".to_string());
        record
    }

    // ── Happy path ───────────────────────────────────────────────────────────

    #[tokio::test]
    async fn review_approve_lock_sequence_ends_locked() {
        let record = fresh_record(6, 6);
        let id = record.id.clone();
        let engine = engine_with(vec![record]);

        let reviewed = engine
            .review(&id, &admin(), Some("Spot-checked Class 3".to_string()))
            .await
            .unwrap();
        assert_eq!(reviewed.status, RecordStatus::Reviewed);
        assert_eq!(reviewed.reviewed_by, Some(admin()));
        assert!(reviewed.reviewed_at.is_some());
        assert_eq!(reviewed.notes.as_deref(), Some("Spot-checked Class 3"));

        let approved = engine.approve(&id, &principal(), None).await.unwrap();
        assert_eq!(approved.status, RecordStatus::Approved);
        assert_eq!(approved.approved_by, Some(principal()));
        assert!(approved.rollback_deadline.is_some());

        let locked = engine.lock(&id, &principal()).await.unwrap();
        assert_eq!(locked.status, RecordStatus::Locked);
        assert!(locked.locked_at.is_some());

        // Three transitions, three audit entries, chronological order.
        assert_eq!(locked.audit_log.len(), 3);
        let actions: Vec<&str> = locked.audit_log.iter().map(|e| e.action.as_str()).collect();
        assert_eq!(actions, ["Review Completed", "Approved", "Locked"]);
        assert!(locked
            .audit_log
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[tokio::test]
    async fn approve_anchors_deadline_at_approval_time() {
        let mut record = fresh_record(6, 6);
        record.status = RecordStatus::Reviewed;
        record.reviewed_by = Some(admin());
        record.reviewed_at = Some(Utc::now());
        let id = record.id.clone();
        let engine = engine_with(vec![record]);

        let before = Utc::now();
        let approved = engine.approve(&id, &principal(), None).await.unwrap();
        let after = Utc::now();

        let deadline = approved.rollback_deadline.unwrap();
        assert!(deadline >= before + Duration::hours(24));
        assert!(deadline <= after + Duration::hours(24));
    }

    #[tokio::test]
    async fn audit_defaults_use_the_standard_descriptions() {
        let record = fresh_record(6, 6);
        let id = record.id.clone();
        let engine = engine_with(vec![record]);

        engine.review(&id, &admin(), None).await.unwrap();
        engine.approve(&id, &principal(), None).await.unwrap();
        let locked = engine.lock(&id, &principal()).await.unwrap();

        assert_eq!(locked.audit_log[0].details, "Data reviewed and validated");
        assert_eq!(
            locked.audit_log[1].details,
            "Attendance data approved for government submission"
        );
        assert_eq!(locked.audit_log[2].details, "Data locked and marked as official");
    }

    // ── Guard violations ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn review_fails_when_not_all_classes_submitted() {
        let record = fresh_record(4, 6);
        let id = record.id.clone();
        let before = record.clone();
        let engine = engine_with(vec![record]);

        let err = engine.review(&id, &admin(), None).await.unwrap_err();
        assert!(matches!(err, RollcallError::GuardViolation { .. }));
        assert!(err.to_string().contains("4 of 6"));

        // Record untouched, bit for bit.
        assert_eq!(engine.record(&id).unwrap(), before);
    }

    #[tokio::test]
    async fn approve_fails_from_pending_review() {
        let record = fresh_record(6, 6);
        let id = record.id.clone();
        let engine = engine_with(vec![record]);

        let err = engine.approve(&id, &principal(), None).await.unwrap_err();
        assert!(matches!(err, RollcallError::GuardViolation { .. }));
        assert_eq!(engine.record(&id).unwrap().status, RecordStatus::PendingReview);
    }

    #[tokio::test]
    async fn lock_fails_unless_approved() {
        let record = fresh_record(6, 6);
        let id = record.id.clone();
        let engine = engine_with(vec![record]);

        assert!(engine.lock(&id, &principal()).await.is_err());
        engine.review(&id, &admin(), None).await.unwrap();
        assert!(engine.lock(&id, &principal()).await.is_err());
    }

    #[tokio::test]
    async fn second_review_fails_after_the_first_commits() {
        let record = fresh_record(6, 6);
        let id = record.id.clone();
        let engine = engine_with(vec![record]);

        engine.review(&id, &admin(), None).await.unwrap();
        let err = engine.review(&id, &admin(), None).await.unwrap_err();
        assert!(matches!(err, RollcallError::GuardViolation { .. }));

        // Audit log only grew by the one successful transition.
        assert_eq!(engine.record(&id).unwrap().audit_log.len(), 1);
    }

    #[tokio::test]
    async fn unknown_record_is_not_found() {
        let engine = engine_with(vec![]);
        let err = engine.review(&RecordId::new(), &admin(), None).await.unwrap_err();
        assert!(matches!(err, RollcallError::NotFound { .. }));
    }

    // ── Rollback window ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn rollback_inside_window_returns_to_pending_review() {
        let record = locked_record(Some(Utc::now() + Duration::hours(2)));
        let id = record.id.clone();
        let engine = engine_with(vec![record]);

        let rolled = engine
            .rollback(&id, &principal(), Some("Class 4 resubmitting".to_string()))
            .await
            .unwrap();

        assert_eq!(rolled.status, RecordStatus::PendingReview);
        assert_eq!(rolled.reviewed_by, None);
        assert_eq!(rolled.reviewed_at, None);
        assert_eq!(rolled.approved_by, None);
        assert_eq!(rolled.approved_at, None);
        assert_eq!(rolled.locked_at, None);
        assert_eq!(rolled.rollback_deadline, None);
        // Notes survive the rollback; only the actor/timestamp fields and
        // the deadline are cleared.
        assert_eq!(rolled.notes.as_deref(), Some("Verified against class registers"));

        let entry = rolled.audit_log.last().unwrap();
        assert_eq!(entry.action, "Rollback Initiated");
        assert_eq!(entry.details, "Class 4 resubmitting");
    }

    #[tokio::test]
    async fn rollback_after_deadline_fails_and_leaves_record_unchanged() {
        let record = locked_record(Some(Utc::now() - Duration::minutes(5)));
        let id = record.id.clone();
        let before = record.clone();
        let engine = engine_with(vec![record]);

        let err = engine.rollback(&id, &principal(), None).await.unwrap_err();
        assert!(matches!(err, RollcallError::GuardViolation { .. }));
        assert!(err.to_string().contains("rollback window expired"));
        assert_eq!(engine.record(&id).unwrap(), before);
    }

    #[tokio::test]
    async fn rollback_without_deadline_fails() {
        let record = locked_record(None);
        let id = record.id.clone();
        let engine = engine_with(vec![record]);

        let err = engine.rollback(&id, &principal(), None).await.unwrap_err();
        assert!(matches!(err, RollcallError::GuardViolation { .. }));
    }

    #[tokio::test]
    async fn rolled_back_record_can_run_the_full_sequence_again() {
        let record = locked_record(Some(Utc::now() + Duration::hours(2)));
        let id = record.id.clone();
        let engine = engine_with(vec![record]);

        engine.rollback(&id, &principal(), None).await.unwrap();
        engine.review(&id, &admin(), None).await.unwrap();
        engine.approve(&id, &principal(), None).await.unwrap();
        let locked = engine.lock(&id, &principal()).await.unwrap();

        assert_eq!(locked.status, RecordStatus::Locked);
        // Rollback + three transitions appended to the existing trail.
        assert_eq!(locked.audit_log.len(), 4);
    }

    // ── Remote failure semantics ─────────────────────────────────────────────

    #[tokio::test]
    async fn remote_failure_leaves_record_unchanged_and_is_retryable() {
        let record = fresh_record(6, 6);
        let id = record.id.clone();
        let before = record.clone();
        let store = RecordStore::seeded(vec![record]).unwrap();
        let engine = ApprovalWorkflowEngine::new(
            store.clone(),
            Box::new(FailingRemote),
            EngineConfig::default(),
        );

        let err = engine.review(&id, &admin(), None).await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(engine.record(&id).unwrap(), before);

        // Retrying the same operation against a healthy remote succeeds.
        let retry_engine =
            ApprovalWorkflowEngine::new(store, Box::new(AcceptingRemote), EngineConfig::default());
        let reviewed = retry_engine.review(&id, &admin(), None).await.unwrap();
        assert_eq!(reviewed.status, RecordStatus::Reviewed);
    }

    #[tokio::test]
    async fn remote_failure_appends_no_audit_entry() {
        let record = fresh_record(6, 6);
        let id = record.id.clone();
        let engine = ApprovalWorkflowEngine::new(
            RecordStore::seeded(vec![record]).unwrap(),
            Box::new(FailingRemote),
            EngineConfig::default(),
        );

        let _ = engine.review(&id, &admin(), None).await;
        assert!(engine.record(&id).unwrap().audit_log.is_empty());
    }

    #[tokio::test]
    async fn in_flight_result_is_discarded_when_the_record_changes_underneath() {
        let record = fresh_record(6, 6);
        let id = record.id.clone();
        let store = RecordStore::seeded(vec![record]).unwrap();
        let engine = ApprovalWorkflowEngine::new(
            store.clone(),
            Box::new(CompetingRemote {
                store,
                id: id.clone(),
            }),
            EngineConfig::default(),
        );

        // The remote commits a competing review before our result lands, so
        // the guard re-check under the lock rejects the stale transition.
        let err = engine.review(&id, &admin(), None).await.unwrap_err();
        assert!(matches!(err, RollcallError::GuardViolation { .. }));

        // The record carries only the competing change. The losing call left
        // no field mutation and no audit entry behind.
        let current = engine.record(&id).unwrap();
        assert_eq!(current.status, RecordStatus::Reviewed);
        assert_eq!(current.reviewed_by, Some(Actor::new("Deputy Head")));
        assert_eq!(current.audit_log.len(), 1);
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn summary_counts_tally_by_status() {
        let mut reviewed = fresh_record(6, 6);
        reviewed.status = RecordStatus::Reviewed;
        reviewed.date = day(7);

        let records = vec![
            ApprovalRecord::new(day(9), 4, 6),
            reviewed,
            locked_record(Some(Utc::now() + Duration::hours(2))),
            {
                let mut expired = locked_record(None);
                expired.date = day(6);
                expired
            },
        ];
        let engine = engine_with(records);

        let counts = engine.summary_counts().unwrap();
        assert_eq!(
            counts,
            SummaryCounts {
                pending_review: 1,
                reviewed: 1,
                approved: 0,
                locked: 2,
                rollback_available: 1,
            }
        );
    }

    #[tokio::test]
    async fn todays_record_matches_the_current_utc_day() {
        let today = Utc::now().date_naive();
        let mut record = ApprovalRecord::new(today, 4, 6);
        record.date = today;
        let id = record.id.clone();

        let engine = engine_with(vec![ApprovalRecord::new(day(1), 6, 6), record]);
        assert_eq!(engine.todays_record().unwrap().unwrap().id, id);
    }

    #[tokio::test]
    async fn todays_record_is_none_when_no_day_is_open() {
        let engine = engine_with(vec![ApprovalRecord::new(day(1), 6, 6)]);
        assert!(engine.todays_record().unwrap().is_none());
    }

    // ── open_day via a submission source ─────────────────────────────────────

    struct FixedCounts(u32, u32);

    impl SubmissionSource for FixedCounts {
        fn submission_counts(&self, _date: NaiveDate) -> (u32, u32) {
            (self.0, self.1)
        }
    }

    #[tokio::test]
    async fn open_day_reads_counts_from_the_source() {
        let engine = engine_with(vec![]);
        let record = engine.open_day(day(9), &FixedCounts(4, 6)).unwrap();

        assert_eq!(record.status, RecordStatus::PendingReview);
        assert_eq!(record.submitted_classes, 4);
        assert_eq!(record.total_classes, 6);
        assert_eq!(record.audit_log.len(), 1);
    }
}
