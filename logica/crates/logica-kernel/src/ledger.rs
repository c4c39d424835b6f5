use sha2::{Digest, Sha256};

/// One append-only, hash-chained ledger entry (spec §3, invariants I2/I3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub entry_id: u64,
    pub speaker_id: u64,
    pub operation: String,
    pub action: String,
    pub status: String,
    pub timestamp: u64,
    pub prev_hash: String,
    pub entry_hash: String,
    pub break_reason: Option<String>,
}

pub const GENESIS_HASH: &str = "genesis";

/// `entry_hash` is a deterministic function of `(entry_id, speaker_id,
/// operation, action, timestamp, prev_hash)`, encoded as colon-joined text
/// and hashed with SHA-256 (the reference host's hash choice — see
/// invariant I3 and the "hash function" open question).
pub fn compute_hash(
    entry_id: u64,
    speaker_id: u64,
    operation: &str,
    action: &str,
    timestamp: u64,
    prev_hash: &str,
) -> String {
    let text = format!("{entry_id}:{speaker_id}:{operation}:{action}:{timestamp}:{prev_hash}");
    let digest = Sha256::digest(text.as_bytes());
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push_str(&format!("{byte:02x}"));
    }
    hex
}

impl LedgerEntry {
    pub fn recomputed_hash(&self) -> String {
        compute_hash(
            self.entry_id,
            self.speaker_id,
            &self.operation,
            &self.action,
            self.timestamp,
            &self.prev_hash,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        let a = compute_hash(0, 0, "boot", "boot", 0, GENESIS_HASH);
        let b = compute_hash(0, 0, "boot", "boot", 0, GENESIS_HASH);
        assert_eq!(a, b);
    }

    #[test]
    fn hash_changes_with_any_field() {
        let base = compute_hash(1, 2, "write", "x=1", 10, "abc");
        assert_ne!(base, compute_hash(1, 2, "write", "x=2", 10, "abc"));
        assert_ne!(base, compute_hash(1, 2, "write", "x=1", 11, "abc"));
    }
}
