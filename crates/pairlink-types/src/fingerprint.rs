//! Attribute fingerprints for donor/receiver matching.
//!
//! The registry never stores raw donor or receiver attributes. Callers hash
//! them client-side and submit only the fingerprint; the matcher then
//! compares fingerprints with exact string equality. [`digest`] is the
//! canonical fingerprint format — the same attribute string always yields
//! the same fingerprint on every node.

use sha2::{Digest, Sha256};

/// Domain-separated SHA-256 fingerprint of an attribute string, hex-encoded.
#[must_use]
pub fn digest(attributes: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"pairlink:fingerprint:v1:");
    hasher.update(attributes.as_bytes());
    hex::encode(hasher.finalize())
}
