//! Error types for the Pairlink pairing registry.
//!
//! All errors use the `PL_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Argument / dispatch errors
//! - 2xx: Storage errors
//! - 3xx: Lifecycle / matching errors
//! - 9xx: Serialization / internal errors
//!
//! Every error is surfaced directly to the caller as the invocation's
//! terminal result. The core performs no internal retry and no compensating
//! rollback — the host transaction discards partial writes on abort.

use thiserror::Error;

/// Central error enum for all Pairlink operations.
#[derive(Debug, Error)]
pub enum PairlinkError {
    // =================================================================
    // Argument / Dispatch Errors (1xx)
    // =================================================================
    /// An argument was missing, empty, or carried an unaccepted value.
    #[error("PL_ERR_100: Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// The operation name did not resolve to a known handler.
    #[error("PL_ERR_101: Unknown operation: {0}")]
    UnknownOperation(String),

    // =================================================================
    // Storage Errors (2xx)
    // =================================================================
    /// An insert collided with an existing row key.
    #[error("PL_ERR_200: Duplicate key: {key}")]
    DuplicateKey { key: String },

    /// A lookup, replace, or delete target was missing.
    #[error("PL_ERR_201: Not found: {key}")]
    NotFound { key: String },

    // =================================================================
    // Lifecycle / Matching Errors (3xx)
    // =================================================================
    /// An operation required an Active record but found something else.
    #[error("PL_ERR_300: Precondition failed: {reason}")]
    PreconditionFailed { reason: String },

    // =================================================================
    // Serialization / Internal (9xx)
    // =================================================================
    /// Payload encode/decode error.
    #[error("PL_ERR_900: Serialization error: {0}")]
    Serialization(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, PairlinkError>;

impl From<serde_json::Error> for PairlinkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
