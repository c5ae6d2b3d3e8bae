use actix_web::{HttpResponse, Responder, get, post, web};
use log::info;

use super::models::{AppState, RegisterNodesRequest, RegisterNodesResponse, ResolveResponse};
use crate::consensus;

/// Register one or more peer addresses.
#[post("/nodes/register/")]
pub async fn register_nodes(
    state: web::Data<AppState>,
    body: web::Json<RegisterNodesRequest>,
) -> impl Responder {
    let mut bc = state.blockchain.lock().await;
    for node in body.into_inner().nodes {
        bc.register_node(node);
    }
    info!("NODES - registry now holds {} peer(s)", bc.nodes.len());

    let mut total_nodes: Vec<String> = bc.nodes.iter().cloned().collect();
    total_nodes.sort();
    HttpResponse::Ok().json(RegisterNodesResponse {
        message: "New nodes have been added",
        total_nodes,
    })
}

/// Run conflict resolution against every registered peer and report
/// whether the local chain was replaced. The ledger lock is released
/// during the peer fan-out, so the chain endpoint keeps serving peers
/// that are resolving against this node at the same time.
#[get("/nodes/resolve/")]
pub async fn resolve_conflicts(state: web::Data<AppState>) -> impl Responder {
    let client = awc::Client::default();
    let replaced = consensus::resolve_conflicts(&state.blockchain, |address| {
        let client = client.clone();
        async move { consensus::fetch_chain(&client, &address).await }
    })
    .await;

    let bc = state.blockchain.lock().await;

    let message = if replaced {
        "Our chain was replaced"
    } else {
        "Our chain is authoritative"
    };
    HttpResponse::Ok().json(ResolveResponse {
        message,
        replaced,
        length: bc.len(),
        chain: bc.chain.clone(),
    })
}
