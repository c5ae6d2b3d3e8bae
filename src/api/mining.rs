use actix_web::{HttpResponse, Responder, get, web};
use log::{debug, info};

use super::models::{AppState, MineResponse};
use crate::blockchain::{MINING_REWARD, REWARD_SENDER, proof::proof_of_work};

/// Forge the next block:
/// - solve proof-of-work against the last block's proof
/// - credit the mining reward to this node (sender `"0"` marks new coin)
/// - seal the pending pool into the new block
///
/// The proof search is CPU-bound and runs inline under the state lock;
/// at the fixed difficulty a solve takes milliseconds, and holding the
/// lock keeps the pool snapshot consistent with the block being forged.
#[get("/mine/")]
pub async fn mine_block(state: web::Data<AppState>) -> impl Responder {
    let mut bc = state.blockchain.lock().await;

    let (last_proof, previous_hash) = {
        let last = bc.last_block();
        (last.proof, last.hash())
    };
    let proof = proof_of_work(last_proof);
    debug!("MINER - solved proof {proof} against {last_proof}");

    bc.new_transaction(
        REWARD_SENDER.to_string(),
        state.node_id.clone(),
        MINING_REWARD,
    );

    let block = bc.new_block(proof, Some(previous_hash));
    let resp = MineResponse {
        message: "New block forged",
        index: block.index,
        transactions: block.transactions.clone(),
        proof: block.proof,
        previous_hash: block.previous_hash.clone(),
    };
    info!("MINER - forged block #{} (proof={})", resp.index, resp.proof);
    HttpResponse::Ok().json(resp)
}
