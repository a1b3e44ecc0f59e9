//! # rollcall-contracts
//!
//! Shared types and error taxonomy for the Rollcall attendance-approval
//! workflow. All crates in the workspace import from here. No business
//! logic lives in this crate — only data definitions and error types.

pub mod audit;
pub mod error;
pub mod record;
pub mod status;

pub use audit::AuditEntry;
pub use error::{RollcallError, RollcallResult};
pub use record::{Actor, ApprovalRecord, RecordId};
pub use status::{BadgeTone, DisplayStatus, RecordStatus, StatusDisplay};
