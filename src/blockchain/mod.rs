pub mod block;
pub mod model;
pub mod proof;

pub use block::Block;
pub use model::Blockchain;

/// Proof baked into the hard-coded genesis block.
pub const GENESIS_PROOF: u64 = 100;

/// Previous-hash sentinel carried by the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "1";

/// Hex suffix a proof digest must end with. Fixed difficulty:
/// four trailing zeros, ~65536 expected trials per solve.
pub const DIFFICULTY_SUFFIX: &str = "0000";

/// Reward credited to a node for forging a block (dev value).
pub const MINING_REWARD: i64 = 1;

/// Sender address marking a mining-reward transaction.
pub const REWARD_SENDER: &str = "0";
