//! # pairlink-store
//!
//! **Storage plane for the Pairlink pairing registry.**
//!
//! Two layers:
//!
//! - [`Table`]: the boundary trait for the host's row-oriented table
//!   primitive (composite string keys, opaque byte payloads). The host
//!   runtime supplies durability and per-invocation atomicity; this crate
//!   reimplements neither.
//! - [`RecordStore`]: the typed adapter that maps a `PairingRecord` to and
//!   from its `(state, couple_id)`-keyed row.
//!
//! [`MemTable`] is the reference `Table` implementation, used by every test
//! and by hosts without a table primitive of their own.

pub mod mem;
pub mod record_store;
pub mod table;

pub use mem::MemTable;
pub use record_store::RecordStore;
pub use table::{RowKey, Table};
