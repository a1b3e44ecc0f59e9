//! Scenario 3: The Rollback Window
//!
//! Yesterday's locked record still has two hours left in its rollback
//! window, so the principal can unlock it for corrections — returning it
//! to `PendingReview` with all approval fields cleared. The record from
//! two days ago has no open window and stays permanently immutable.

use chrono::Utc;

use rollcall_contracts::error::RollcallResult;
use rollcall_contracts::status::{DisplayStatus, RecordStatus};
use rollcall_engine::RecordStore;
use rollcall_remote::FaultPolicy;

use crate::fixtures::{principal, seed_records};

use super::{demo_engine, demo_fault_policy, expect_guard_violation, with_retry};

/// Run Scenario 3 with the demo fault policy.
pub async fn run_scenario() -> RollcallResult<()> {
    run_with_policy(demo_fault_policy()?).await
}

/// Run Scenario 3: rollback inside and outside the window.
pub async fn run_with_policy(policy: FaultPolicy) -> RollcallResult<()> {
    println!("=== Scenario 3: The Rollback Window ===");
    println!();

    let now = Utc::now();
    let records = seed_records(now);
    let in_window = records[1].id.clone();
    let lapsed = records[2].id.clone();
    let engine = demo_engine(RecordStore::seeded(records)?, policy)?;

    let counts = engine.summary_counts()?;
    println!(
        "  Summary: {} pending, {} locked, {} rollback available",
        counts.pending_review, counts.locked, counts.rollback_available
    );
    println!();

    // Yesterday: window open for another two hours.
    let record = engine.record(&in_window)?;
    println!(
        "  {} is {} until {}",
        record.date,
        DisplayStatus::of(&record, now).display().label,
        record.rollback_deadline.expect("seed record has a deadline")
    );

    let approver = principal();
    let rolled = with_retry("rollback", || {
        engine.rollback(&in_window, &approver, Some("Class 4 resubmitting corrections".to_string()))
    })
    .await?;
    assert_eq!(rolled.status, RecordStatus::PendingReview);
    println!("  Rolled back to {} — approval fields cleared", rolled.status);
    println!(
        "  Trail kept its history: {} entries, last action '{}'",
        rolled.audit_log.len(),
        rolled.audit_log.last().expect("rollback appends an entry").action
    );
    println!();

    // Two days ago: no open window, permanently immutable.
    let record = engine.record(&lapsed)?;
    println!("  {} is {} with no rollback window", record.date, record.status);
    let reason = expect_guard_violation(engine.rollback(&lapsed, &principal(), None).await)?;
    println!("  Rollback rejected: {}", reason);
    assert_eq!(engine.record(&lapsed)?.status, RecordStatus::Locked);

    println!();
    println!("  Scenario 3 complete.");
    println!();
    Ok(())
}
