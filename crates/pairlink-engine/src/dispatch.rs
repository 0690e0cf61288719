//! Operation dispatch for the host's invocation entry points.
//!
//! The host hands over an operation name and an ordered list of string
//! arguments; the dispatcher resolves the name to a handler, enforces the
//! argument arity, and serializes the handler's result into the byte payload
//! returned to the caller.
//!
//! The mapping is a closed [`Operation`] enum rather than a string-keyed
//! handler table, so a missing arm is a compile error instead of a runtime
//! map miss.

use std::fmt;
use std::str::FromStr;

use pairlink_store::{RecordStore, Table};
use pairlink_types::{PairlinkError, Result, codec, constants};

use crate::{lifecycle, matcher};

/// The closed set of operations the registry exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `create coupleID donorHash receiverHash` — new Active record.
    Create,
    /// `update coupleID fieldName newValue` — field-level update.
    Update,
    /// `findMatch coupleID` — reciprocal match search.
    FindMatch,
    /// `query coupleID` — read-only point lookup.
    Query,
    /// `init` — privileged bootstrap reset of the backing table.
    Init,
}

impl Operation {
    /// Number of string arguments this operation expects.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Create | Self::Update => 3,
            Self::FindMatch | Self::Query => 1,
            Self::Init => 0,
        }
    }

    /// The wire name of this operation.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::FindMatch => "findMatch",
            Self::Query => "query",
            Self::Init => "init",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operation {
    type Err = PairlinkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "findMatch" => Ok(Self::FindMatch),
            "query" => Ok(Self::Query),
            "init" => Ok(Self::Init),
            other => Err(PairlinkError::UnknownOperation(other.to_string())),
        }
    }
}

/// Resolve `name` and run the operation. Entry point for hosts that deliver
/// the operation name as a raw string.
pub fn dispatch_named<T: Table>(
    store: &mut RecordStore<T>,
    name: &str,
    args: &[String],
) -> Result<Vec<u8>> {
    dispatch(store, name.parse()?, args)
}

/// Run one operation as a single unit of work and serialize its result.
///
/// # Errors
/// `InvalidArgument` on an arity mismatch, plus whatever the handler itself
/// surfaces. No retry, no compensation: the error is the invocation's
/// terminal result and the host transaction discards any partial writes.
pub fn dispatch<T: Table>(
    store: &mut RecordStore<T>,
    op: Operation,
    args: &[String],
) -> Result<Vec<u8>> {
    if args.len() != op.arity() {
        return Err(PairlinkError::InvalidArgument {
            reason: format!(
                "{op} expects {} argument(s), got {}",
                op.arity(),
                args.len()
            ),
        });
    }
    tracing::debug!(%op, args = args.len(), "dispatching operation");

    match op {
        Operation::Create => {
            let record = lifecycle::create(store, &args[0], &args[1], &args[2])?;
            codec::to_payload(&record)
        }
        Operation::Update => {
            lifecycle::update(store, &args[0], &args[1], &args[2])?;
            Ok(constants::UPDATE_OK_PAYLOAD.as_bytes().to_vec())
        }
        Operation::FindMatch => {
            let matches = matcher::find_match(store, &args[0])?;
            codec::list_to_payload(&matches)
        }
        Operation::Query => {
            let record = lifecycle::query(store, &args[0])?;
            codec::to_payload(&record)
        }
        Operation::Init => {
            store.reset()?;
            Ok(constants::INIT_OK_PAYLOAD.as_bytes().to_vec())
        }
    }
}
