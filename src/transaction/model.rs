use serde::{Deserialize, Serialize};

/// A transfer between two addresses, immutable once sealed into a block.
///
/// Addresses are opaque strings and amounts are unchecked: negative or
/// overdrawn values are accepted, since economic validity is out of scope
/// for this ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: i64,
}

impl Transaction {
    pub fn new(sender: String, recipient: String, amount: i64) -> Self {
        Self {
            sender,
            recipient,
            amount,
        }
    }
}
