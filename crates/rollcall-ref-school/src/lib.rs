//! # rollcall-ref-school
//!
//! Reference school deployment of the Rollcall approval workflow.
//!
//! Provides the pieces a dashboard demo needs:
//!
//! - **Fixtures** — the reference seed records and fixed actor identities.
//! - **Submission ledger** — six classes with teachers and submitted flags,
//!   implementing `SubmissionSource`.
//! - **Scenarios** — three runnable walkthroughs: a full approval day,
//!   review blocked by partial submissions, and the rollback window.
//!
//! All data is hardcoded and fictional. No external systems are contacted.

pub mod fixtures;
pub mod scenarios;
pub mod submissions;

/// The embedded reference configuration (workflow + remote stub settings).
pub const DEMO_CONFIG: &str = include_str!("../config/rollcall.toml");
