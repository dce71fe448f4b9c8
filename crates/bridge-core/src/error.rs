//! Error type for record-level operations.
//!
//! Downstream crates wrap `BridgeError` as one variant of their own enums
//! via `#[from]`.

use thiserror::Error;

use crate::BridgeId;

/// Errors produced by `bridge-core`.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("bridge {0} not found")]
    BridgeNotFound(BridgeId),

    #[error("condition history has {years} years but {scores} scores")]
    HistoryLengthMismatch { years: usize, scores: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand result type for `bridge-core`.
pub type BridgeResult<T> = Result<T, BridgeError>;
