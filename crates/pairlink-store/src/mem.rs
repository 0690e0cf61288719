//! In-memory reference implementation of the [`Table`] boundary.
//!
//! `MemTable` stands in for the host runtime's table primitive in tests and
//! single-process deployments. It honors the full `Table` error contract but
//! provides no durability; atomicity across multiple writes is whatever the
//! caller arranges.

use std::collections::BTreeMap;

use pairlink_types::{PairlinkError, Result};

use crate::table::{RowKey, Table};

/// A `BTreeMap`-backed table with composite string keys.
#[derive(Debug, Default)]
pub struct MemTable {
    name: String,
    rows: BTreeMap<RowKey, Vec<u8>>,
}

impl MemTable {
    /// Create an empty table with the given name (used only in logs).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
        }
    }

    /// Number of rows currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Table for MemTable {
    fn reset(&mut self) -> Result<()> {
        let dropped = self.rows.len();
        self.rows.clear();
        tracing::warn!(table = %self.name, dropped, "table destroyed and recreated");
        Ok(())
    }

    fn insert(&mut self, key: RowKey, payload: Vec<u8>) -> Result<()> {
        if self.rows.contains_key(&key) {
            return Err(PairlinkError::DuplicateKey {
                key: key.to_string(),
            });
        }
        self.rows.insert(key, payload);
        Ok(())
    }

    fn replace(&mut self, key: &RowKey, payload: Vec<u8>) -> Result<()> {
        match self.rows.get_mut(key) {
            Some(existing) => {
                *existing = payload;
                Ok(())
            }
            None => Err(PairlinkError::NotFound {
                key: key.to_string(),
            }),
        }
    }

    fn delete(&mut self, key: &RowKey) -> Result<()> {
        self.rows
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| PairlinkError::NotFound {
                key: key.to_string(),
            })
    }

    fn get(&self, key: &RowKey) -> Result<Vec<u8>> {
        self.rows
            .get(key)
            .cloned()
            .ok_or_else(|| PairlinkError::NotFound {
                key: key.to_string(),
            })
    }

    fn scan_prefix(&self, prefix: &RowKey) -> Result<Vec<(RowKey, Vec<u8>)>> {
        Ok(self
            .rows
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, payload)| (key.clone(), payload.clone()))
            .collect())
    }
}
