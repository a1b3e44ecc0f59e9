//! # rollcall-audit
//!
//! SHA-256 hash-chained sealing of a locked approval record's audit trail.
//!
//! ## Overview
//!
//! A locked record is the official, immutable version of a day's
//! attendance. `seal_record` wraps each of its audit entries in a
//! `ChainedEntry` linked to the previous one by SHA-256 — tampering with
//! any entry, even a single byte, breaks the chain and is detected by
//! `verify_seal`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rollcall_audit::{seal_record, verify_seal};
//!
//! let seal = seal_record(&locked_record)?;
//! assert!(verify_seal(&locked_record, &seal));
//! ```

pub mod chain;
pub mod seal;

pub use chain::{chain_entries, hash_entry, verify_chain, ChainedEntry, GENESIS_HASH};
pub use seal::{seal_record, verify_seal, AuditSeal};

// ── Tests ─────────────────────────────────────────────────────────────────────
