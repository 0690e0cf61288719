//! The table storage boundary.
//!
//! [`Table`] is the seam between the registry core and whatever row-oriented
//! primitive the host runtime provides. A row is a composite key of ordered
//! string columns plus one opaque payload column. All operations run inside
//! the host's ambient transaction: a sequence of writes in one invocation
//! either all commit or none do, and the core relies on that instead of
//! compensating rollbacks.

use std::fmt;

use pairlink_types::Result;

/// Ordered key-column values identifying one row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(pub Vec<String>);

impl RowKey {
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(columns.into_iter().map(Into::into).collect())
    }

    /// Whether this key's leading columns equal `prefix`'s columns.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        prefix.0.len() <= self.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

/// A row-oriented table with composite string keys and byte payloads.
///
/// Error contract, matching the host primitive's semantics:
/// - `insert` is insert-only (no upsert) and fails with `DuplicateKey` when
///   the exact key already exists;
/// - `replace`, `delete`, and `get` fail with `NotFound` when it does not;
/// - `scan_prefix` returns every row whose leading key columns match the
///   prefix, fully drained before returning. Delivery order is an
///   implementation detail and must not carry business meaning.
pub trait Table {
    /// Destroy all rows and recreate the table. Privileged bootstrap reset.
    fn reset(&mut self) -> Result<()>;

    /// Insert a new row. Fails with `DuplicateKey` if the key exists.
    fn insert(&mut self, key: RowKey, payload: Vec<u8>) -> Result<()>;

    /// Overwrite an existing row. Fails with `NotFound` if the key is absent.
    fn replace(&mut self, key: &RowKey, payload: Vec<u8>) -> Result<()>;

    /// Remove a row. Fails with `NotFound` if the key is absent.
    fn delete(&mut self, key: &RowKey) -> Result<()>;

    /// Point lookup. Fails with `NotFound` if the key is absent.
    fn get(&self, key: &RowKey) -> Result<Vec<u8>>;

    /// All rows whose leading key columns match `prefix`.
    fn scan_prefix(&self, prefix: &RowKey) -> Result<Vec<(RowKey, Vec<u8>)>>;
}
