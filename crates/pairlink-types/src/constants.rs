//! System-wide constants for the Pairlink registry.

/// Default name of the backing pairing table.
pub const DEFAULT_TABLE_NAME: &str = "PairingTable";

/// Name of the leading key column holding the record state.
pub const STATE_COLUMN: &str = "State";

/// Name of the second key column holding the couple id.
pub const COUPLE_ID_COLUMN: &str = "CoupleID";

/// Name of the non-key column holding the serialized record payload.
pub const PAYLOAD_COLUMN: &str = "Json";

/// Fixed payload returned by a successful `update` invocation.
pub const UPDATE_OK_PAYLOAD: &str = "update successful";

/// Fixed payload returned by a successful `init` invocation.
pub const INIT_OK_PAYLOAD: &str = "initialization complete";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Pairlink";
