//! Record lifecycle: create, point query, and field-level update.
//!
//! All writes here are single-row except the Active → Inactive transition,
//! which moves the row to a new key (delete old, insert new) because the
//! state is part of the composite key. The host transaction makes the
//! two-step move atomic; a failure between the steps is reverted wholesale.

use std::str::FromStr;

use pairlink_store::{RecordStore, Table};
use pairlink_types::{
    CoupleId, MatchState, PairingRecord, PairlinkError, RecordState, Result,
};

/// Create a new Active, NotMatched pairing record.
///
/// # Errors
/// - `InvalidArgument` if any input is empty
/// - `DuplicateKey` if an Active record with this id already exists
pub fn create<T: Table>(
    store: &mut RecordStore<T>,
    couple_id: &str,
    donor_hash: &str,
    receiver_hash: &str,
) -> Result<PairingRecord> {
    let record = PairingRecord::new(couple_id, donor_hash, receiver_hash)?;
    store.put(&record)?;
    tracing::info!(couple = %record.couple_id, "pairing record created");
    Ok(record)
}

/// Point lookup of the Active record for `couple_id`.
///
/// # Errors
/// `NotFound` if no Active row exists, or if the decoded payload carries an
/// empty id (corrupt-row guard).
pub fn query<T: Table>(store: &RecordStore<T>, couple_id: &str) -> Result<PairingRecord> {
    let id = CoupleId::from(couple_id);
    let record = store.get_one(RecordState::Active, &id)?;
    if record.couple_id.is_empty() {
        tracing::warn!(couple = couple_id, "stored payload has an empty couple id");
        return Err(PairlinkError::NotFound {
            key: format!("{}/{couple_id}", RecordState::Active),
        });
    }
    Ok(record)
}

/// A caller-updatable field of a pairing record.
///
/// Unrecognized field names are rejected with `InvalidArgument` rather than
/// silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    DonorHash,
    ReceiverHash,
    Match,
    State,
}

impl FromStr for UpdateField {
    type Err = PairlinkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "DonorHash" => Ok(Self::DonorHash),
            "ReceiverHash" => Ok(Self::ReceiverHash),
            "Match" => Ok(Self::Match),
            "State" => Ok(Self::State),
            other => Err(PairlinkError::InvalidArgument {
                reason: format!("unknown update field: {other}"),
            }),
        }
    }
}

/// Update one field of the Active record for `couple_id`.
///
/// Accepted values per field:
/// - `DonorHash` / `ReceiverHash`: any non-empty string, stored verbatim
/// - `Match`: only `notmatched` — `matched` is set solely by the matcher
/// - `State`: only `inactive` — the one-way retirement transition, moving
///   the row from the Active key to the Inactive key
///
/// # Errors
/// - `NotFound` if no Active record exists for `couple_id`
/// - `InvalidArgument` for an unknown field or an unaccepted value
pub fn update<T: Table>(
    store: &mut RecordStore<T>,
    couple_id: &str,
    field: &str,
    value: &str,
) -> Result<PairingRecord> {
    let field: UpdateField = field.parse()?;
    let mut record = query(store, couple_id)?;

    match field {
        UpdateField::DonorHash | UpdateField::ReceiverHash => {
            if value.is_empty() {
                return Err(PairlinkError::InvalidArgument {
                    reason: format!("couple {couple_id}: hash value must not be empty"),
                });
            }
            if field == UpdateField::DonorHash {
                record.donor_hash = value.to_string();
            } else {
                record.receiver_hash = value.to_string();
            }
        }
        UpdateField::Match => {
            if value.parse::<MatchState>()? != MatchState::NotMatched {
                return Err(PairlinkError::InvalidArgument {
                    reason: format!(
                        "couple {couple_id}: Match may only be reset to notmatched by callers"
                    ),
                });
            }
            record.match_state = MatchState::NotMatched;
        }
        UpdateField::State => {
            if value.parse::<RecordState>()? != RecordState::Inactive {
                return Err(PairlinkError::InvalidArgument {
                    reason: format!("couple {couple_id}: State may only transition to inactive"),
                });
            }
        }
    }
    record.touch();

    if field == UpdateField::State {
        // The state is a key column, so retirement is a key move. Both rows
        // belong to the same host transaction: an abort undoes the pair.
        store.delete(RecordState::Active, &record.couple_id)?;
        record.state = RecordState::Inactive;
        store.put(&record)?;
        tracing::info!(couple = %record.couple_id, "pairing record retired");
    } else {
        store.replace(&record)?;
        tracing::debug!(couple = %record.couple_id, field = ?field, "pairing record updated");
    }
    Ok(record)
}
