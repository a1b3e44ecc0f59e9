//! In-memory approval record store.
//!
//! `RecordStore` is the single owner of the authoritative record
//! collection — there is no ambient global. All records are kept in a
//! `Vec` behind a `Mutex`; the engine acquires the lock once per commit so
//! mutation and audit append always land in the same critical section.
//!
//! The store enforces the structural invariants that are independent of
//! the state machine: one record per calendar day, and
//! `submitted_classes <= total_classes`.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use rollcall_contracts::{
    audit::AuditEntry,
    error::{RollcallError, RollcallResult},
    record::{Actor, ApprovalRecord, RecordId},
};

/// The mutable interior of a `RecordStore`.
struct StoreState {
    /// All records, in the order they were opened or seeded.
    records: Vec<ApprovalRecord>,
}

/// The authoritative, in-memory collection of approval records.
///
/// Cloning a `RecordStore` clones the `Arc`, so the engine and any read
/// views observe the same collection.
#[derive(Clone)]
pub struct RecordStore {
    state: Arc<Mutex<StoreState>>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState { records: Vec::new() })),
        }
    }

    /// Create a store pre-populated with `records`.
    ///
    /// Seed records must satisfy the structural invariants: unique dates
    /// and `submitted_classes <= total_classes`. Violations are reported
    /// as `GuardViolation` and nothing is stored.
    pub fn seeded(records: Vec<ApprovalRecord>) -> RollcallResult<Self> {
        for (i, record) in records.iter().enumerate() {
            if record.submitted_classes > record.total_classes {
                return Err(RollcallError::GuardViolation {
                    reason: format!(
                        "record for {} reports {} submitted of {} classes",
                        record.date, record.submitted_classes, record.total_classes
                    ),
                });
            }
            if records[..i].iter().any(|r| r.date == record.date) {
                return Err(RollcallError::GuardViolation {
                    reason: format!("duplicate record for {}", record.date),
                });
            }
        }
        Ok(Self {
            state: Arc::new(Mutex::new(StoreState { records })),
        })
    }

    fn lock(&self) -> RollcallResult<MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|e| RollcallError::StorePoisoned {
            reason: format!("record store lock poisoned: {}", e),
        })
    }

    /// Open a new day's record in `PendingReview`.
    ///
    /// Called (conceptually by the submission source) once any class has
    /// submitted data for `date`. Appends the initial system audit entry
    /// recording how many classes had submitted at open time.
    ///
    /// Fails with `GuardViolation` if a record for `date` already exists,
    /// no class has submitted yet, or the counts are inconsistent.
    pub fn open_day(
        &self,
        date: NaiveDate,
        submitted_classes: u32,
        total_classes: u32,
        now: DateTime<Utc>,
    ) -> RollcallResult<ApprovalRecord> {
        if submitted_classes > total_classes {
            return Err(RollcallError::GuardViolation {
                reason: format!(
                    "{} submitted of {} classes is not a valid count",
                    submitted_classes, total_classes
                ),
            });
        }
        if submitted_classes == 0 {
            return Err(RollcallError::GuardViolation {
                reason: format!("no class has submitted attendance data for {}", date),
            });
        }

        let mut state = self.lock()?;
        if state.records.iter().any(|r| r.date == date) {
            return Err(RollcallError::GuardViolation {
                reason: format!("a record for {} already exists", date),
            });
        }

        let mut record = ApprovalRecord::new(date, submitted_classes, total_classes);
        let (action, details) = if submitted_classes == total_classes {
            (
                "All Submissions Received",
                format!("All {} classes submitted attendance data", total_classes),
            )
        } else {
            (
                "Submissions Received",
                format!(
                    "{} out of {} classes submitted attendance data",
                    submitted_classes, total_classes
                ),
            )
        };
        record
            .audit_log
            .push(AuditEntry::new(now, action, Actor::new("System"), details));

        info!(record_id = %record.id, date = %date, submitted = submitted_classes, total = total_classes, "opened approval record");

        state.records.push(record.clone());
        Ok(record)
    }

    /// A snapshot of every record, in store order.
    ///
    /// This is the presentation layer's read view; mutating the returned
    /// clones has no effect on the store.
    pub fn snapshot(&self) -> RollcallResult<Vec<ApprovalRecord>> {
        Ok(self.lock()?.records.clone())
    }

    /// Look up one record by ID.
    pub fn get(&self, record_id: &RecordId) -> RollcallResult<ApprovalRecord> {
        let state = self.lock()?;
        state
            .records
            .iter()
            .find(|r| &r.id == record_id)
            .cloned()
            .ok_or_else(|| RollcallError::NotFound {
                record_id: record_id.to_string(),
            })
    }

    /// Run `f` against the stored record under the store lock.
    ///
    /// This is the engine's commit path: `f` re-validates the guard and
    /// applies the mutation + audit append atomically. The updated record
    /// is cloned out and returned.
    pub(crate) fn update<F>(&self, record_id: &RecordId, f: F) -> RollcallResult<ApprovalRecord>
    where
        F: FnOnce(&mut ApprovalRecord) -> RollcallResult<()>,
    {
        let mut state = self.lock()?;
        let record = state
            .records
            .iter_mut()
            .find(|r| &r.id == record_id)
            .ok_or_else(|| RollcallError::NotFound {
                record_id: record_id.to_string(),
            })?;
        f(record)?;
        Ok(record.clone())
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn open_day_creates_pending_record_with_system_entry() {
        let store = RecordStore::new();
        let record = store.open_day(day(9), 4, 6, Utc::now()).unwrap();

        assert_eq!(record.submitted_classes, 4);
        assert_eq!(record.audit_log.len(), 1);
        assert_eq!(record.audit_log[0].action, "Submissions Received");
        assert_eq!(record.audit_log[0].user, Actor::new("System"));
        assert!(record.audit_log[0].details.contains("4 out of 6"));
    }

    #[test]
    fn open_day_with_full_submissions_uses_the_all_received_label() {
        let store = RecordStore::new();
        let record = store.open_day(day(9), 6, 6, Utc::now()).unwrap();
        assert_eq!(record.audit_log[0].action, "All Submissions Received");
    }

    #[test]
    fn open_day_rejects_duplicate_dates() {
        let store = RecordStore::new();
        store.open_day(day(9), 4, 6, Utc::now()).unwrap();

        let err = store.open_day(day(9), 5, 6, Utc::now()).unwrap_err();
        assert!(matches!(err, RollcallError::GuardViolation { .. }));
        assert_eq!(store.snapshot().unwrap().len(), 1);
    }

    #[test]
    fn open_day_rejects_inconsistent_counts() {
        let store = RecordStore::new();
        assert!(store.open_day(day(9), 7, 6, Utc::now()).is_err());
        assert!(store.open_day(day(9), 0, 6, Utc::now()).is_err());
    }

    #[test]
    fn seeded_rejects_duplicate_dates() {
        let records = vec![
            ApprovalRecord::new(day(9), 6, 6),
            ApprovalRecord::new(day(9), 4, 6),
        ];
        assert!(RecordStore::seeded(records).is_err());
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = RecordStore::new();
        let err = store.get(&RecordId::new()).unwrap_err();
        assert!(matches!(err, RollcallError::NotFound { .. }));
    }

    #[test]
    fn snapshot_is_a_detached_copy() {
        let store = RecordStore::new();
        store.open_day(day(9), 4, 6, Utc::now()).unwrap();

        let mut view = store.snapshot().unwrap();
        view[0].submitted_classes = 99;

        assert_eq!(store.snapshot().unwrap()[0].submitted_classes, 4);
    }
}
