//! Configuration for the pairing table schema.
//!
//! The original design kept the table name and column layout in global
//! mutable singletons. Here they live in an explicit [`TableConfig`] passed
//! to the store at construction, so two stores with different schemas can
//! coexist in one process.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Schema of the table backing the pairing registry.
///
/// The row key is the ordered tuple `(state, couple_id)`; the single non-key
/// column holds the full serialized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Name of the backing table.
    pub table_name: String,
    /// Name of the leading key column (record state).
    pub state_column: String,
    /// Name of the second key column (couple id).
    pub couple_id_column: String,
    /// Name of the opaque payload column.
    pub payload_column: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table_name: constants::DEFAULT_TABLE_NAME.to_string(),
            state_column: constants::STATE_COLUMN.to_string(),
            couple_id_column: constants::COUPLE_ID_COLUMN.to_string(),
            payload_column: constants::PAYLOAD_COLUMN.to_string(),
        }
    }
}

impl TableConfig {
    /// A config identical to the default except for the table name.
    #[must_use]
    pub fn named(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let cfg = TableConfig::default();
        assert_eq!(cfg.table_name, "PairingTable");
        assert_eq!(cfg.state_column, "State");
        assert_eq!(cfg.couple_id_column, "CoupleID");
        assert_eq!(cfg.payload_column, "Json");
    }

    #[test]
    fn named_overrides_only_the_table_name() {
        let cfg = TableConfig::named("Shadow");
        assert_eq!(cfg.table_name, "Shadow");
        assert_eq!(cfg.payload_column, "Json");
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = TableConfig::named("T1");
        let json = serde_json::to_string(&cfg).unwrap();
        let back: TableConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
