//! Scenario 2: Partial Submissions Block Review
//!
//! Today's record has 4 of 6 classes submitted. The review guard rejects
//! the transition, the record stays in `PendingReview`, and no audit entry
//! is appended — failed attempts never reach the trail.

use chrono::Utc;

use rollcall_contracts::error::RollcallResult;
use rollcall_engine::RecordStore;
use rollcall_remote::FaultPolicy;

use crate::fixtures::{admin, seed_records};

use super::{demo_engine, demo_fault_policy, expect_guard_violation};

/// Run Scenario 2 with the demo fault policy.
pub async fn run_scenario() -> RollcallResult<()> {
    run_with_policy(demo_fault_policy()?).await
}

/// Run Scenario 2: review blocked by missing submissions.
pub async fn run_with_policy(policy: FaultPolicy) -> RollcallResult<()> {
    println!("=== Scenario 2: Partial Submissions Block Review ===");
    println!();

    let store = RecordStore::seeded(seed_records(Utc::now()))?;
    let engine = demo_engine(store, policy)?;

    let today = engine
        .todays_record()?
        .expect("the seed set contains today's record");
    println!(
        "  Today's record: {} ({} of {} classes submitted)",
        today.status, today.submitted_classes, today.total_classes
    );

    let before_entries = today.audit_log.len();
    let reason = expect_guard_violation(engine.review(&today.id, &admin(), None).await)?;
    println!("  Review rejected: {}", reason);

    let after = engine.record(&today.id)?;
    println!(
        "  Status unchanged: {} — audit entries still {}",
        after.status,
        after.audit_log.len()
    );
    assert_eq!(after.audit_log.len(), before_entries);

    println!();
    println!("  Scenario 2 complete.");
    println!();
    Ok(())
}
