use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::blockchain::{Block, Blockchain};
use crate::transaction::Transaction;

/// Shared application state: the single ledger instance plus this node's
/// identifier (the mining-reward recipient).
///
/// The async mutex serializes every mutating call and is safe to hold
/// across the resolver's network fan-out.
pub struct AppState {
    pub blockchain: Mutex<Blockchain>,
    pub node_id: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            blockchain: Mutex::new(Blockchain::new()),
            node_id: Uuid::new_v4().simple().to_string(),
        }
    }
}

/* ---------- Chain API Models ---------- */

/// The payload peers fetch during conflict resolution; its shape must stay
/// bit-compatible across nodes.
#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub chain: &'a [Block],
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
}

/* ---------- Mining API Models ---------- */

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MineResponse {
    pub message: &'static str,
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

/* ---------- TX API Models ---------- */

#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: i64,
}

#[derive(Serialize)]
pub struct NewTxResponse {
    pub message: String,
    pub index: u64,
}

/* ---------- Node API Models ---------- */

#[derive(Deserialize)]
pub struct RegisterNodesRequest {
    pub nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct RegisterNodesResponse {
    pub message: &'static str,
    pub total_nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct ResolveResponse {
    pub message: &'static str,
    pub replaced: bool,
    pub length: usize,
    pub chain: Vec<Block>,
}
