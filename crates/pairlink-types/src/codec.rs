//! The payload codec: [`PairingRecord`] ↔ opaque payload bytes.
//!
//! The payload is JSON with the stable wire field names declared on the
//! record struct. Encode/decode failures surface as
//! [`PairlinkError::Serialization`]; the store never interprets the bytes.

use crate::{PairingRecord, Result};

/// Serialize a record into the payload-column byte form.
pub fn to_payload(record: &PairingRecord) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(record)?)
}

/// Deserialize a payload column back into a record.
pub fn from_payload(bytes: &[u8]) -> Result<PairingRecord> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Serialize a list of records, as returned by a match search.
pub fn list_to_payload(records: &[PairingRecord]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(records)?)
}
