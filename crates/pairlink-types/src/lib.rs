//! # pairlink-types
//!
//! Shared types, errors, and configuration for the **Pairlink** pairing
//! registry.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Record model**: [`PairingRecord`], [`RecordState`], [`MatchState`], [`CoupleId`]
//! - **Payload codec**: [`codec::to_payload`], [`codec::from_payload`]
//! - **Fingerprints**: [`fingerprint::digest`]
//! - **Configuration**: [`TableConfig`]
//! - **Errors**: [`PairlinkError`] with `PL_ERR_` prefix codes
//! - **Constants**: table schema names and operation arities

pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod fingerprint;
pub mod record;

pub use config::*;
pub use error::*;
pub use record::*;

// Constants are accessed via `pairlink_types::constants::FOO`
// (not re-exported to avoid name collisions).
