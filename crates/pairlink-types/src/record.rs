//! The pairing record model.
//!
//! A [`PairingRecord`] represents one donor/receiver couple and its matching
//! state. Records are value types: they are freely cloned between components
//! and never aliased — the store exclusively owns the persisted row form.
//!
//! The serialized field names (`State`, `CoupleID`, `DonorHash`, ...) are the
//! wire payload format and must stay stable across versions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{PairlinkError, Result};

// ---------------------------------------------------------------------------
// CoupleId
// ---------------------------------------------------------------------------

/// Caller-assigned identifier of a donor/receiver couple.
///
/// Unique among records whose state is [`RecordState::Active`]. An inactive
/// record with the same id may coexist, since the storage key is
/// `(state, couple_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoupleId(pub String);

impl CoupleId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CoupleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoupleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// ---------------------------------------------------------------------------
// RecordState
// ---------------------------------------------------------------------------

/// Lifecycle state of a pairing record.
///
/// Only Active records participate in matching and point queries. The
/// Active → Inactive transition is one-way; there is no reactivation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordState {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "inactive")]
    Inactive,
}

impl RecordState {
    /// The key-column value for this state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for RecordState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordState {
    type Err = PairlinkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(PairlinkError::InvalidArgument {
                reason: format!("unknown record state: {other}"),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// MatchState
// ---------------------------------------------------------------------------

/// Whether a reciprocal counterpart has been found for a record.
///
/// `Matched` is only ever set by the matching engine. Callers may reset a
/// record to `NotMatched` through a field update, but never the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    #[serde(rename = "matched")]
    Matched,
    #[serde(rename = "notmatched")]
    NotMatched,
}

impl MatchState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Matched => "matched",
            Self::NotMatched => "notmatched",
        }
    }
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchState {
    type Err = PairlinkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "matched" => Ok(Self::Matched),
            "notmatched" => Ok(Self::NotMatched),
            other => Err(PairlinkError::InvalidArgument {
                reason: format!("unknown match state: {other}"),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// PairingRecord
// ---------------------------------------------------------------------------

/// One donor/receiver couple and its matching state.
///
/// The donor and receiver hashes are opaque fingerprints of the couple's
/// attributes. The matcher compares them with exact, case-sensitive string
/// equality — no normalization of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingRecord {
    #[serde(rename = "State")]
    pub state: RecordState,
    #[serde(rename = "CoupleID")]
    pub couple_id: CoupleId,
    #[serde(rename = "DonorHash")]
    pub donor_hash: String,
    #[serde(rename = "ReceiverHash")]
    pub receiver_hash: String,
    #[serde(rename = "Match")]
    pub match_state: MatchState,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl PairingRecord {
    /// Construct a fresh Active, NotMatched record.
    ///
    /// # Errors
    /// Returns [`PairlinkError::InvalidArgument`] if any input is empty.
    pub fn new(
        couple_id: impl Into<String>,
        donor_hash: impl Into<String>,
        receiver_hash: impl Into<String>,
    ) -> Result<Self> {
        let couple_id = couple_id.into();
        let donor_hash = donor_hash.into();
        let receiver_hash = receiver_hash.into();
        if couple_id.is_empty() {
            return Err(PairlinkError::InvalidArgument {
                reason: "couple id must not be empty".into(),
            });
        }
        if donor_hash.is_empty() || receiver_hash.is_empty() {
            return Err(PairlinkError::InvalidArgument {
                reason: format!("couple {couple_id}: donor and receiver hashes must not be empty"),
            });
        }
        let now = Utc::now();
        Ok(Self {
            state: RecordState::Active,
            couple_id: CoupleId(couple_id),
            donor_hash,
            receiver_hash,
            match_state: MatchState::NotMatched,
            created_at: now,
            updated_at: now,
        })
    }

    /// Whether this record is eligible for matching and point queries.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == RecordState::Active
    }

    /// Reciprocal-match predicate: our donor fits their receiver and their
    /// donor fits our receiver. Exact string equality, case-sensitive.
    #[must_use]
    pub fn is_reciprocal_with(&self, other: &Self) -> bool {
        self.donor_hash == other.receiver_hash && self.receiver_hash == other.donor_hash
    }

    /// Bump the audit timestamp after a mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, donor: &str, receiver: &str) -> PairingRecord {
        PairingRecord::new(id, donor, receiver).unwrap()
    }

    #[test]
    fn new_record_is_active_and_notmatched() {
        let r = record("C1", "h1", "h2");
        assert_eq!(r.state, RecordState::Active);
        assert_eq!(r.match_state, MatchState::NotMatched);
        assert_eq!(r.couple_id.as_str(), "C1");
        assert_eq!(r.created_at, r.updated_at);
    }

    #[test]
    fn empty_inputs_rejected() {
        for (id, donor, receiver) in [("", "h1", "h2"), ("C1", "", "h2"), ("C1", "h1", "")] {
            let err = PairingRecord::new(id, donor, receiver).unwrap_err();
            assert!(matches!(err, PairlinkError::InvalidArgument { .. }));
        }
    }

    #[test]
    fn reciprocal_predicate() {
        let a = record("A", "h1", "h2");
        let b = record("B", "h2", "h1");
        let c = record("C", "h2", "h3");
        assert!(a.is_reciprocal_with(&b));
        assert!(b.is_reciprocal_with(&a));
        assert!(!a.is_reciprocal_with(&c));
    }

    #[test]
    fn reciprocal_is_case_sensitive() {
        let a = record("A", "H1", "h2");
        let b = record("B", "h2", "h1");
        assert!(!a.is_reciprocal_with(&b));
    }

    #[test]
    fn state_round_trips_through_str() {
        assert_eq!("active".parse::<RecordState>().unwrap(), RecordState::Active);
        assert_eq!(
            "inactive".parse::<RecordState>().unwrap(),
            RecordState::Inactive
        );
        assert!("Active".parse::<RecordState>().is_err());
        assert_eq!(RecordState::Active.to_string(), "active");
    }

    #[test]
    fn match_state_round_trips_through_str() {
        assert_eq!(
            "matched".parse::<MatchState>().unwrap(),
            MatchState::Matched
        );
        assert_eq!(
            "notmatched".parse::<MatchState>().unwrap(),
            MatchState::NotMatched
        );
        assert!("MATCHED".parse::<MatchState>().is_err());
    }

    #[test]
    fn wire_field_names_are_stable() {
        let r = record("C1", "h1", "h2");
        let json: serde_json::Value = serde_json::to_value(&r).unwrap();
        for field in [
            "State",
            "CoupleID",
            "DonorHash",
            "ReceiverHash",
            "Match",
            "CreatedAt",
            "UpdatedAt",
        ] {
            assert!(json.get(field).is_some(), "missing wire field {field}");
        }
        assert_eq!(json["State"], "active");
        assert_eq!(json["Match"], "notmatched");
    }

    #[test]
    fn touch_advances_updated_at() {
        let mut r = record("C1", "h1", "h2");
        let before = r.updated_at;
        std::thread::sleep(std::time::Duration::from_millis(2));
        r.touch();
        assert!(r.updated_at > before);
        assert_eq!(r.created_at, before);
    }
}
