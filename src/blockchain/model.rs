use std::collections::HashSet;

use chrono::Utc;

use super::{Block, GENESIS_PREVIOUS_HASH, GENESIS_PROOF, proof};
use crate::transaction::Transaction;

/// In-memory ledger state: the chain itself, the pool of transactions
/// waiting for the next block, and the set of known peer addresses.
///
/// There is no internal locking; the surrounding service owns the single
/// instance and serializes mutating calls.
#[derive(Debug)]
pub struct Blockchain {
    pub chain: Vec<Block>,
    pub pending: Vec<Transaction>,
    pub nodes: HashSet<String>,
}

impl Blockchain {
    /// Initialize a new ledger seeded with the hard-coded genesis block.
    pub fn new() -> Self {
        let mut bc = Self {
            chain: Vec::new(),
            pending: Vec::new(),
            nodes: HashSet::new(),
        };
        bc.new_block(GENESIS_PROOF, Some(GENESIS_PREVIOUS_HASH.to_string()));
        bc
    }

    /// Seal the pending pool into a new block and append it to the chain.
    ///
    /// `previous_hash` is only supplied when the caller already computed it
    /// (mining does, to hash the last block exactly once); otherwise the
    /// hash of the current last block is used. The pending pool is cleared:
    /// the new block takes ownership of whatever was queued.
    pub fn new_block(&mut self, proof: u64, previous_hash: Option<String>) -> &Block {
        let block = Block {
            index: self.chain.len() as u64 + 1,
            timestamp: Utc::now().timestamp_millis(),
            transactions: std::mem::take(&mut self.pending),
            proof,
            previous_hash: previous_hash.unwrap_or_else(|| self.last_block().hash()),
        };
        self.chain.push(block);
        self.last_block()
    }

    /// Queue a transaction for the next mined block and return the index
    /// of the block that will hold it. Sender, recipient and amount are
    /// taken as-is.
    pub fn new_transaction(&mut self, sender: String, recipient: String, amount: i64) -> u64 {
        self.pending.push(Transaction::new(sender, recipient, amount));
        self.last_block().index + 1
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("chain always holds at least the genesis block")
    }

    /// Add a peer address to the node registry. Idempotent.
    pub fn register_node(&mut self, address: String) {
        self.nodes.insert(address);
    }

    #[allow(clippy::len_without_is_empty)] // genesis makes an empty chain unreachable
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Determine whether an arbitrary candidate chain is valid: every block
    /// must link to the hash of its predecessor and carry a proof that
    /// solves the difficulty predicate against the predecessor's proof.
    ///
    /// Chains shorter than two blocks have no pair to falsify and are
    /// trivially valid. The candidate is checked purely against itself, so
    /// a foreign genesis is not rejected here.
    pub fn valid_chain(chain: &[Block]) -> bool {
        for pair in chain.windows(2) {
            let (prev, block) = (&pair[0], &pair[1]);
            if block.previous_hash != prev.hash() {
                return false;
            }
            if !proof::valid_proof(prev.proof, block.proof) {
                return false;
            }
        }
        true
    }
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}

/// Mine `extra` blocks on top of genesis with real proof-of-work so the
/// resulting chain passes validation. Shared by the validator and
/// consensus tests.
#[cfg(test)]
pub(crate) fn mined_blockchain(extra: usize) -> Blockchain {
    let mut bc = Blockchain::new();
    for i in 0..extra {
        bc.new_transaction(format!("sender-{i}"), format!("recipient-{i}"), 1 + i as i64);
        let proof = proof::proof_of_work(bc.last_block().proof);
        bc.new_block(proof, None);
    }
    bc
}
