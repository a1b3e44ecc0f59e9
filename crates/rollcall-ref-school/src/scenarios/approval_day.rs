//! Scenario 1: A Full Approval Day
//!
//! All six classes submit, the admin reviews, the principal approves and
//! locks, and the locked record's audit trail is sealed and verified.
//! Demonstrates the complete happy path:
//!
//!   open_day → review → approve → lock → seal
//!
//! Remote calls go through the configured fault-injecting stub, so this
//! scenario also shows the caller-side retry discipline for transient
//! failures.

use chrono::Utc;

use rollcall_audit::{seal_record, verify_seal};
use rollcall_contracts::error::RollcallResult;
use rollcall_contracts::status::DisplayStatus;
use rollcall_engine::RecordStore;
use rollcall_remote::FaultPolicy;

use crate::fixtures::{admin, principal};
use crate::submissions::ClassSubmissionLedger;

use super::{demo_engine, demo_fault_policy, with_retry};

/// Run Scenario 1 with the demo fault policy.
pub async fn run_scenario() -> RollcallResult<()> {
    run_with_policy(demo_fault_policy()?).await
}

/// Run Scenario 1: the full approval day.
pub async fn run_with_policy(policy: FaultPolicy) -> RollcallResult<()> {
    println!("=== Scenario 1: A Full Approval Day ===");
    println!();

    let engine = demo_engine(RecordStore::new(), policy)?;

    let mut ledger = ClassSubmissionLedger::reference();
    for class in ledger.outstanding() {
        println!("  Outstanding: {} ({})", class.name, class.teacher);
    }
    ledger.mark_all_submitted();
    println!("  All 6 classes have now submitted attendance data.");
    println!();

    let record = engine.open_day(Utc::now().date_naive(), &ledger)?;
    let id = record.id.clone();
    println!("  Opened record for {}: {}", record.date, record.status);

    let reviewer = admin();
    let approver = principal();

    let reviewed = with_retry("review", || {
        engine.review(&id, &reviewer, Some("Spot-checked Class 2 and Class 4".to_string()))
    })
    .await?;
    println!("  {} reviewed by {}", reviewed.status, reviewer);

    let approved = with_retry("approve", || engine.approve(&id, &approver, None)).await?;
    println!(
        "  {} by {} — rollback window open until {}",
        approved.status,
        approver,
        approved.rollback_deadline.expect("approval sets the deadline")
    );

    let locked = with_retry("lock", || engine.lock(&id, &approver)).await?;
    println!("  {} at {}", locked.status, locked.locked_at.expect("lock sets the timestamp"));
    println!(
        "  Display condition: {}",
        DisplayStatus::of(&locked, Utc::now()).display().label
    );
    println!();

    println!("  Audit trail ({} entries):", locked.audit_log.len());
    for entry in &locked.audit_log {
        println!("    [{}] {} — {}", entry.user, entry.action, entry.details);
    }

    let seal = seal_record(&locked)?;
    println!();
    println!("  Audit seal terminal hash: {}", seal.terminal_hash);
    println!(
        "  Seal verification: {}",
        if verify_seal(&locked, &seal) { "PASS" } else { "FAIL" }
    );

    println!();
    println!("  Scenario 1 complete.");
    println!();
    Ok(())
}
