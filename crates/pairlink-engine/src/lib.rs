//! # pairlink-engine
//!
//! **Record lifecycle and matching core for the Pairlink registry.**
//!
//! Three modules, all operating through a [`pairlink_store::RecordStore`]:
//!
//! - [`lifecycle`]: create, point query, and field-level update of pairing
//!   records, enforcing the schema and transition rules
//! - [`matcher`]: the reciprocal donor↔receiver hash search across Active
//!   records
//! - [`dispatch`]: the closed operation-name → handler mapping used by the
//!   host's invocation entry points
//!
//! The engine has no internal concurrency: each invocation is a
//! run-to-completion unit of work, and the host runtime supplies atomicity
//! and durability around it. A host-level abort reverts every row written
//! during the invocation, including the multi-row batch a match search
//! produces.

pub mod dispatch;
pub mod lifecycle;
pub mod matcher;

pub use dispatch::{Operation, dispatch, dispatch_named};
pub use lifecycle::{UpdateField, create, query, update};
pub use matcher::find_match;
