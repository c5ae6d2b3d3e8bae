//! Conflict resolution: longest valid chain wins.
//!
//! The resolver fans out to every registered peer, validates each reported
//! chain in full, and adopts the longest candidate that is strictly longer
//! than the local chain. Per-peer failures never abort a resolution; a
//! failing peer simply contributes an empty candidate.

use std::future::Future;

use futures_util::future;
use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::blockchain::{Block, Blockchain};

/// Payload a peer serves from its chain endpoint.
///
/// `length` is what the peer claims; the resolver compares actual block
/// counts, so a peer cannot win by overstating its length.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteChain {
    pub length: usize,
    pub chain: Vec<Block>,
}

/// Why a single peer's chain could not be retrieved. Always swallowed by
/// the resolver; surfaced only in logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("peer responded with status {0}")]
    Status(u16),
    #[error("malformed chain payload: {0}")]
    Payload(String),
}

/// Reconcile the local chain against every registered peer.
///
/// `fetch` retrieves one peer's [`RemoteChain`]; all fetches are issued
/// concurrently and all run to completion before the longest-chain
/// decision. The ledger lock is held only to snapshot the registry and to
/// apply the replacement, never across the network fan-out — the chain
/// endpoint must stay responsive while a resolution is in flight, since
/// peers resolving against each other fetch it concurrently. Ties go to
/// the local chain, and among equally long peer candidates the first seen
/// wins. Returns whether the local chain was replaced.
pub async fn resolve_conflicts<F, Fut>(ledger: &Mutex<Blockchain>, fetch: F) -> bool
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<RemoteChain, FetchError>>,
{
    let (peers, local_len) = {
        let bc = ledger.lock().await;
        (bc.nodes.iter().cloned().collect::<Vec<String>>(), bc.len())
    };
    if peers.is_empty() {
        debug!("CONSENSUS - no peers registered, local chain stands");
        return false;
    }

    let candidates = future::join_all(peers.iter().map(|peer| {
        let fut = fetch(peer.clone());
        async move {
            match fut.await {
                Ok(remote) => {
                    if Blockchain::valid_chain(&remote.chain) {
                        debug!(
                            "CONSENSUS - peer {peer} reported a valid chain (length {}, claimed {})",
                            remote.chain.len(),
                            remote.length
                        );
                        remote.chain
                    } else {
                        warn!("CONSENSUS - peer {peer} reported an invalid chain, discarding");
                        Vec::new()
                    }
                }
                Err(err) => {
                    warn!("CONSENSUS - fetch from peer {peer} failed: {err}");
                    Vec::new()
                }
            }
        }
    }))
    .await;

    let mut best: Option<Vec<Block>> = None;
    for candidate in candidates {
        let longest_so_far = best.as_ref().map_or(local_len, Vec::len);
        if candidate.len() > longest_so_far {
            best = Some(candidate);
        }
    }

    let Some(chain) = best else {
        debug!("CONSENSUS - local chain is authoritative (length {local_len})");
        return false;
    };

    let mut bc = ledger.lock().await;
    // The chain may have grown while the lock was released; replacement
    // still requires strictly greater length at swap time.
    if chain.len() <= bc.len() {
        debug!(
            "CONSENSUS - local chain caught up during fan-out (length {}), keeping it",
            bc.len()
        );
        return false;
    }
    info!(
        "CONSENSUS - local chain replaced (length {} -> {})",
        bc.len(),
        chain.len()
    );
    bc.chain = chain;
    true
}

/// Fetch a peer's full chain over HTTP.
///
/// This is the transport behind [`resolve_conflicts`] in the running
/// service; timeout policy lives in the client, not the resolver.
pub async fn fetch_chain(client: &awc::Client, address: &str) -> Result<RemoteChain, FetchError> {
    let url = format!("{}/api/v1/chain/", address.trim_end_matches('/'));
    let mut resp = client
        .get(url)
        .send()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;
    if !resp.status().is_success() {
        return Err(FetchError::Status(resp.status().as_u16()));
    }
    resp.json::<RemoteChain>()
        .await
        .map_err(|err| FetchError::Payload(err.to_string()))
}
