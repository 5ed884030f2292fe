//! Checksum validation for migrations
//!
//! A migration whose SQL changed after it was applied is refused.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 checksum of migration SQL, hex-encoded
pub fn compute_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
