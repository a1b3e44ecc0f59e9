//! # rollcall-engine
//!
//! The approval workflow engine for daily attendance records.
//!
//! This crate provides:
//! - The collaborator traits (`RemoteCall`, `SubmissionSource`)
//! - The `RecordStore` that owns the authoritative record collection
//! - The `ApprovalWorkflowEngine` that enforces the transition rules
//! - The TOML-loaded `EngineConfig`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rollcall_engine::{ApprovalWorkflowEngine, EngineConfig, RecordStore};
//!
//! let engine = ApprovalWorkflowEngine::new(store, remote, EngineConfig::default());
//! let record = engine.review(&id, &actor, None).await?;
//! ```

pub mod config;
pub mod engine;
pub mod store;
pub mod traits;

pub use config::EngineConfig;
pub use engine::{ApprovalWorkflowEngine, SummaryCounts};
pub use store::RecordStore;
pub use traits::{RemoteCall, SubmissionSource};
