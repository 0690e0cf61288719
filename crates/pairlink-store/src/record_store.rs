//! Typed record store over the [`Table`] boundary.
//!
//! `RecordStore` owns the row representation of a [`PairingRecord`]: the
//! composite `(state, couple_id)` key plus the serialized payload column.
//! Components above this layer never see raw rows or key tuples.

use pairlink_types::{CoupleId, PairingRecord, RecordState, Result, TableConfig, codec};

use crate::table::{RowKey, Table};

/// Maps pairing records to and from composite-keyed table rows.
#[derive(Debug)]
pub struct RecordStore<T: Table> {
    table: T,
    config: TableConfig,
}

impl<T: Table> RecordStore<T> {
    /// Wrap a table handle with the given schema config.
    pub fn new(table: T, config: TableConfig) -> Self {
        tracing::debug!(
            table = %config.table_name,
            key = %format!("({}, {})", config.state_column, config.couple_id_column),
            payload = %config.payload_column,
            "record store opened"
        );
        Self { table, config }
    }

    /// The schema this store was opened with.
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Destroy and recreate the backing table. Privileged bootstrap reset;
    /// every stored record is lost.
    pub fn reset(&mut self) -> Result<()> {
        self.table.reset()
    }

    /// Insert a new record row. Insert-only: fails with `DuplicateKey` if a
    /// row with the same `(state, couple_id)` already exists.
    pub fn put(&mut self, record: &PairingRecord) -> Result<()> {
        let payload = codec::to_payload(record)?;
        self.table
            .insert(self.key(record.state, &record.couple_id), payload)
    }

    /// Overwrite the row matching the record's current key. Fails with
    /// `NotFound` if no such row exists.
    pub fn replace(&mut self, record: &PairingRecord) -> Result<()> {
        let payload = codec::to_payload(record)?;
        self.table
            .replace(&self.key(record.state, &record.couple_id), payload)
    }

    /// Remove the row at `(state, couple_id)`.
    pub fn delete(&mut self, state: RecordState, couple_id: &CoupleId) -> Result<()> {
        self.table.delete(&self.key(state, couple_id))
    }

    /// Point lookup of one record.
    pub fn get_one(&self, state: RecordState, couple_id: &CoupleId) -> Result<PairingRecord> {
        let payload = self.table.get(&self.key(state, couple_id))?;
        codec::from_payload(&payload)
    }

    /// All records stored under the given state.
    ///
    /// The underlying scan is fully drained before this returns, so callers
    /// may mutate rows afterwards without iterating a moving target. Row
    /// order carries no business meaning.
    pub fn scan_state(&self, state: RecordState) -> Result<Vec<PairingRecord>> {
        let rows = self.table.scan_prefix(&RowKey::new([state.as_str()]))?;
        rows.iter()
            .map(|(_, payload)| codec::from_payload(payload))
            .collect()
    }

    fn key(&self, state: RecordState, couple_id: &CoupleId) -> RowKey {
        RowKey::new([state.as_str(), couple_id.as_str()])
    }
}

#[cfg(test)]
mod tests {
    use pairlink_types::{MatchState, PairlinkError};

    use super::*;
    use crate::mem::MemTable;

    fn store() -> RecordStore<MemTable> {
        let config = TableConfig::default();
        RecordStore::new(MemTable::new(config.table_name.clone()), config)
    }

    fn record(id: &str, donor: &str, receiver: &str) -> PairingRecord {
        PairingRecord::new(id, donor, receiver).unwrap()
    }

    #[test]
    fn put_then_get_one_round_trips() {
        let mut store = store();
        let r = record("C1", "h1", "h2");
        store.put(&r).unwrap();
        let back = store.get_one(RecordState::Active, &r.couple_id).unwrap();
        assert_eq!(r, back);
    }

    #[test]
    fn put_twice_is_a_duplicate() {
        let mut store = store();
        store.put(&record("C1", "h1", "h2")).unwrap();
        let err = store.put(&record("C1", "h3", "h4")).unwrap_err();
        assert!(matches!(err, PairlinkError::DuplicateKey { .. }));
    }

    #[test]
    fn replace_rewrites_the_payload_in_place() {
        let mut store = store();
        let mut r = record("C1", "h1", "h2");
        store.put(&r).unwrap();

        r.match_state = MatchState::Matched;
        store.replace(&r).unwrap();

        let back = store.get_one(RecordState::Active, &r.couple_id).unwrap();
        assert_eq!(back.match_state, MatchState::Matched);
    }

    #[test]
    fn replace_missing_row_is_not_found() {
        let mut store = store();
        let err = store.replace(&record("C1", "h1", "h2")).unwrap_err();
        assert!(matches!(err, PairlinkError::NotFound { .. }));
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut store = store();
        let r = record("C1", "h1", "h2");
        store.put(&r).unwrap();
        store.delete(RecordState::Active, &r.couple_id).unwrap();
        let err = store
            .get_one(RecordState::Active, &r.couple_id)
            .unwrap_err();
        assert!(matches!(err, PairlinkError::NotFound { .. }));
    }

    #[test]
    fn scan_state_only_sees_that_state() {
        let mut store = store();
        store.put(&record("C1", "h1", "h2")).unwrap();
        store.put(&record("C2", "h3", "h4")).unwrap();

        let mut retired = record("C3", "h5", "h6");
        retired.state = RecordState::Inactive;
        store.put(&retired).unwrap();

        let active = store.scan_state(RecordState::Active).unwrap();
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(PairingRecord::is_active));

        let inactive = store.scan_state(RecordState::Inactive).unwrap();
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].couple_id.as_str(), "C3");
    }

    #[test]
    fn key_move_keeps_both_states_distinct() {
        // The two-step delete-then-put a state transition performs.
        let mut store = store();
        let mut r = record("C1", "h1", "h2");
        store.put(&r).unwrap();

        store.delete(RecordState::Active, &r.couple_id).unwrap();
        r.state = RecordState::Inactive;
        store.put(&r).unwrap();

        assert!(store.get_one(RecordState::Active, &r.couple_id).is_err());
        let back = store.get_one(RecordState::Inactive, &r.couple_id).unwrap();
        assert_eq!(back.state, RecordState::Inactive);
    }

    #[test]
    fn reset_clears_every_record() {
        let mut store = store();
        store.put(&record("C1", "h1", "h2")).unwrap();
        store.reset().unwrap();
        assert!(store.scan_state(RecordState::Active).unwrap().is_empty());
    }
}
