//! # Accumulator Errors

use shared_types::ProtocolError;
use thiserror::Error;

/// Accumulator failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccumulatorError {
    /// `count == 2^TREE_DEPTH`.
    #[error("Merkle tree full: {capacity} leaves")]
    TreeFull {
        /// Maximum number of leaves
        capacity: u64,
    },

    /// Restored state that no sequence of appends produces.
    #[error("Inconsistent accumulator state: {0}")]
    InconsistentState(String),
}

impl From<AccumulatorError> for ProtocolError {
    fn from(err: AccumulatorError) -> Self {
        match err {
            AccumulatorError::TreeFull { .. } => ProtocolError::TreeFull,
            AccumulatorError::InconsistentState(detail) => ProtocolError::InvalidState(detail),
        }
    }
}
