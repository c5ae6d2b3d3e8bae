use sha2::{Digest, Sha256};

use super::DIFFICULTY_SUFFIX;

/// Check whether `proof` solves the difficulty predicate relative to the
/// previous block's proof: SHA-256 of the decimal concatenation
/// `"{last_proof}{proof}"` must end in [`DIFFICULTY_SUFFIX`].
pub fn valid_proof(last_proof: u64, proof: u64) -> bool {
    let guess = format!("{last_proof}{proof}");
    let mut hasher = Sha256::new();
    hasher.update(guess.as_bytes());
    hex::encode(hasher.finalize()).ends_with(DIFFICULTY_SUFFIX)
}

/// Linear search for the smallest proof satisfying [`valid_proof`].
///
/// CPU-bound and synchronous; at the fixed difficulty this takes ~65536
/// trials on average. Callers that need responsiveness run it off the
/// request path.
pub fn proof_of_work(last_proof: u64) -> u64 {
    let mut proof = 0;
    while !valid_proof(last_proof, proof) {
        proof += 1;
    }
    proof
}
