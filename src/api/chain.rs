use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, ChainResponse, ValidateResponse};
use crate::blockchain::Blockchain;

/// Get the full blockchain. Peers consume this during conflict resolution.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().await;
    let resp = ChainResponse {
        length: bc.len(),
        chain: &bc.chain,
    };
    HttpResponse::Ok().json(resp)
}

/// Validate the local chain end-to-end.
#[get("/chain/valid/")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().await;
    HttpResponse::Ok().json(ValidateResponse {
        valid: Blockchain::valid_chain(&bc.chain),
        length: bc.len(),
    })
}
