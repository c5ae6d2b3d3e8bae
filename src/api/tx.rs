use actix_web::{HttpResponse, Responder, post, web};
use log::debug;

use super::models::{AppState, NewTxRequest, NewTxResponse};

/// Submit a transaction into the pending pool.
///
/// Addresses and amounts are accepted as-is; economic validity is not this
/// ledger's concern. Responds with the index of the block that will hold
/// the transaction.
#[post("/transactions/")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> impl Responder {
    let req = body.into_inner();
    let mut bc = state.blockchain.lock().await;
    let index = bc.new_transaction(req.sender, req.recipient, req.amount);
    debug!("TX - queued transaction for block #{index} (pool size {})", bc.pending.len());

    HttpResponse::Created().json(NewTxResponse {
        message: format!("Transaction will be added to block {index}"),
        index,
    })
}
