//! Sealing a locked record's audit trail.
//!
//! Once a record is locked it is the official, government-submittable
//! version of the day. `seal_record` commits to its entire audit trail
//! with a hash chain; the resulting `AuditSeal` travels with the export
//! and `verify_seal` detects any later tampering with the record's
//! entries or their order.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use rollcall_contracts::{
    error::{RollcallError, RollcallResult},
    record::ApprovalRecord,
    status::RecordStatus,
};

use crate::chain::{chain_entries, verify_chain, ChainedEntry};

/// A sealed commitment to one locked record's audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditSeal {
    /// The record this seal covers.
    pub record_id: String,
    /// The calendar day the record governs.
    pub date: NaiveDate,
    /// The record's audit entries, hash-chained in chronological order.
    pub entries: Vec<ChainedEntry>,
    /// The `this_hash` of the last entry — a compact commitment to the
    /// whole trail. Empty string for an empty trail.
    pub terminal_hash: String,
    /// Wall-clock time (UTC) the seal was produced.
    pub sealed_at: DateTime<Utc>,
}

/// Seal `record`'s audit trail.
///
/// Only locked records can be sealed; anything else is a `GuardViolation`.
pub fn seal_record(record: &ApprovalRecord) -> RollcallResult<AuditSeal> {
    if record.status != RecordStatus::Locked {
        return Err(RollcallError::GuardViolation {
            reason: format!(
                "only locked records can be sealed, record is '{}'",
                record.status.display().label
            ),
        });
    }

    let record_id = record.id.to_string();
    let entries = chain_entries(&record_id, &record.audit_log);
    let terminal_hash = entries
        .last()
        .map(|e| e.this_hash.clone())
        .unwrap_or_default();

    info!(
        record_id = %record_id,
        date = %record.date,
        entry_count = entries.len(),
        terminal_hash = %terminal_hash,
        "audit trail sealed"
    );

    Ok(AuditSeal {
        record_id,
        date: record.date,
        entries,
        terminal_hash,
        sealed_at: Utc::now(),
    })
}

/// Verify `seal` against the record it claims to cover.
///
/// Returns `true` only when the chain itself is intact AND it matches the
/// record's current audit log entry-for-entry.
pub fn verify_seal(record: &ApprovalRecord, seal: &AuditSeal) -> bool {
    if seal.record_id != record.id.to_string() {
        return false;
    }
    if seal.entries.len() != record.audit_log.len() {
        return false;
    }
    if !verify_chain(&seal.entries) {
        return false;
    }
    seal.entries
        .iter()
        .zip(record.audit_log.iter())
        .all(|(chained, entry)| &chained.entry == entry)
}
