//! Hash-chain primitives over a record's audit trail.
//!
//! Every field that contributes to an entry's hash is listed explicitly so
//! nothing is accidentally omitted.
//!
//! Hash input layout (bytes, in order):
//!   1. record_id as UTF-8 bytes
//!   2. sequence as 8-byte little-endian
//!   3. prev_hash as UTF-8 bytes (64 ASCII hex chars)
//!   4. canonical JSON of the audit entry (serde_json, no pretty-printing)

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use rollcall_contracts::audit::AuditEntry;

/// The sentinel `prev_hash` for the first entry in every chain.
///
/// 64 hex zeros — a value that can never be the SHA-256 of real data,
/// making genesis detection unambiguous.
pub const GENESIS_HASH: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// One audit entry wrapped with its position and hashes in the chain.
///
/// Modifying any field — including those of the embedded `entry` —
/// invalidates `this_hash` and every subsequent `prev_hash`, which
/// `verify_chain` detects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainedEntry {
    /// Monotonically increasing position in the chain, starting at 0.
    pub sequence: u64,
    /// The record whose audit trail this entry belongs to.
    pub record_id: String,
    /// The immutable audit entry as it appears on the record.
    pub entry: AuditEntry,
    /// SHA-256 hash (hex) of the previous chained entry, or `GENESIS_HASH`.
    pub prev_hash: String,
    /// SHA-256 hash (hex) of this entry's canonical content.
    pub this_hash: String,
}

/// Compute the SHA-256 hash for one position in the chain.
///
/// Returns a lowercase 64-character hex string.
///
/// # Panics
///
/// Panics if `entry` cannot be serialized to JSON — which cannot happen
/// for the well-formed `AuditEntry` type.
pub fn hash_entry(record_id: &str, sequence: u64, entry: &AuditEntry, prev_hash: &str) -> String {
    let entry_json =
        serde_json::to_vec(entry).expect("AuditEntry must always be serializable to JSON");

    let mut hasher = Sha256::new();
    hasher.update(record_id.as_bytes());
    hasher.update(sequence.to_le_bytes());
    hasher.update(prev_hash.as_bytes());
    hasher.update(&entry_json);

    hex::encode(hasher.finalize())
}

/// Build the hash chain over `entries` in their stored (chronological) order.
pub fn chain_entries(record_id: &str, entries: &[AuditEntry]) -> Vec<ChainedEntry> {
    let mut chained = Vec::with_capacity(entries.len());
    let mut prev_hash = GENESIS_HASH.to_string();

    for (sequence, entry) in entries.iter().enumerate() {
        let sequence = sequence as u64;
        let this_hash = hash_entry(record_id, sequence, entry, &prev_hash);
        chained.push(ChainedEntry {
            sequence,
            record_id: record_id.to_string(),
            entry: entry.clone(),
            prev_hash: prev_hash.clone(),
            this_hash: this_hash.clone(),
        });
        prev_hash = this_hash;
    }

    chained
}

/// Verify the integrity of a hash chain.
///
/// Returns `true` when both rules hold for every entry:
///
/// 1. **Prev-hash linkage** — each entry's `prev_hash` equals the
///    `this_hash` of the preceding entry (or `GENESIS_HASH` for entry 0).
/// 2. **Hash correctness** — each entry's `this_hash` matches the value
///    recomputed from its own fields.
///
/// Returns `false` the moment any mismatch is detected. An empty chain
/// is defined as valid.
pub fn verify_chain(entries: &[ChainedEntry]) -> bool {
    let mut expected_prev = GENESIS_HASH.to_string();

    for chained in entries {
        if chained.prev_hash != expected_prev {
            return false;
        }

        let recomputed = hash_entry(
            &chained.record_id,
            chained.sequence,
            &chained.entry,
            &chained.prev_hash,
        );
        if chained.this_hash != recomputed {
            return false;
        }

        expected_prev = chained.this_hash.clone();
    }

    true
}
