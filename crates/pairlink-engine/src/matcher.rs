//! Reciprocal match search across Active pairing records.
//!
//! Couple A matches couple B when A's donor fingerprint equals B's receiver
//! fingerprint **and** A's receiver fingerprint equals B's donor
//! fingerprint. The comparison is exact and case-sensitive.
//!
//! The search is symmetric but not one-to-one: every reciprocal candidate is
//! marked Matched and returned, none are removed from future scans, and
//! re-running the search on an already-matched record re-evaluates the same
//! candidates. All rows written here belong to one host transaction; an
//! abort reverts the whole batch.

use pairlink_store::{RecordStore, Table};
use pairlink_types::{CoupleId, MatchState, PairingRecord, PairlinkError, RecordState, Result};

/// Find every Active record that reciprocally matches `couple_id`.
///
/// Each matched candidate is persisted with `Match = matched` and collected
/// into the result. If any candidate matched, the queried record is also
/// persisted as matched — but not included in the returned list.
///
/// # Errors
/// - `PreconditionFailed` if the record exists only under the Inactive key
/// - `NotFound` if the id exists under neither key
pub fn find_match<T: Table>(
    store: &mut RecordStore<T>,
    couple_id: &str,
) -> Result<Vec<PairingRecord>> {
    let id = CoupleId::from(couple_id);
    let queried = match store.get_one(RecordState::Active, &id) {
        Ok(record) => record,
        Err(PairlinkError::NotFound { .. })
            if store.get_one(RecordState::Inactive, &id).is_ok() =>
        {
            return Err(PairlinkError::PreconditionFailed {
                reason: format!("couple {couple_id} is inactive and cannot be matched"),
            });
        }
        Err(err) => return Err(err),
    };
    if !queried.is_active() {
        // Corrupt row: payload state disagrees with the key it sits under.
        return Err(PairlinkError::PreconditionFailed {
            reason: format!("couple {couple_id} is not active"),
        });
    }

    // Drain the scan completely before the first write; the candidates must
    // not be iterated while this same invocation mutates them.
    let candidates = store.scan_state(RecordState::Active)?;
    tracing::debug!(
        couple = couple_id,
        candidates = candidates.len(),
        "evaluating reciprocal candidates"
    );

    let mut matched = Vec::new();
    for mut candidate in candidates {
        if candidate.couple_id == queried.couple_id {
            continue;
        }
        if !queried.is_reciprocal_with(&candidate) {
            continue;
        }
        candidate.match_state = MatchState::Matched;
        candidate.touch();
        store.replace(&candidate)?;
        matched.push(candidate);
    }

    if matched.is_empty() {
        tracing::info!(couple = couple_id, "no reciprocal match found");
    } else {
        let mut queried = queried;
        queried.match_state = MatchState::Matched;
        queried.touch();
        store.replace(&queried)?;
        tracing::info!(
            couple = couple_id,
            matches = matched.len(),
            "reciprocal matches recorded"
        );
    }
    Ok(matched)
}
