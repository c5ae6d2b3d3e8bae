use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::transaction::Transaction;

/// A single block in the chain, linking to its predecessor by hash and
/// carrying the batch of transactions sealed into it.
///
/// The serialized shape is the wire shape peers exchange and hash over,
/// so field names must stay stable (`previousHash` on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub index: u64,     // 1-based position in the chain
    pub timestamp: i64, // Unix timestamp in milliseconds (UTC)
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

impl Block {
    /// Compute the SHA-256 hash of this block.
    ///
    /// The block is first converted to a JSON value whose object keys are
    /// ordered (serde_json maps sort by key), so two blocks with identical
    /// contents always produce an identical preimage no matter how they
    /// were constructed or decoded.
    pub fn hash(&self) -> String {
        let value = serde_json::to_value(self).expect("serialize block");
        let canonical = serde_json::to_string(&value).expect("serialize canonical json");
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        hex::encode(hasher.finalize())
    }
}
