//! # Domain Errors

use shared_types::{Address, ProtocolError};
use thiserror::Error;
use xd_02_merkle_accumulator::AccumulatorError;

/// Outbox errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutboxError {
    /// `initialize` called twice.
    #[error("Outbox already initialized")]
    AlreadyInitialized,

    /// No validator manager bound yet.
    #[error("Outbox not initialized")]
    NotInitialized,

    /// Outbox halted.
    #[error("Outbox failed")]
    Failed,

    /// `fail` from someone other than the bound manager.
    #[error("Unauthorized caller {caller}")]
    Unauthorized {
        /// Rejected caller
        caller: Address,
    },

    /// Body over the limit.
    #[error("Message too large: {len} bytes exceeds limit of {max}")]
    MessageTooLarge {
        /// Body length
        len: usize,
        /// Limit
        max: usize,
    },

    /// Checkpoint requested before any dispatch.
    #[error("No messages dispatched")]
    EmptyTree,

    /// Accumulator capacity reached.
    #[error(transparent)]
    Accumulator(#[from] AccumulatorError),
}

impl From<OutboxError> for ProtocolError {
    fn from(err: OutboxError) -> Self {
        match err {
            OutboxError::AlreadyInitialized => ProtocolError::AlreadyInitialized,
            OutboxError::Unauthorized { .. } => ProtocolError::Unauthorized,
            OutboxError::MessageTooLarge { len, max } => ProtocolError::MessageTooLarge { len, max },
            OutboxError::Accumulator(inner) => inner.into(),
            other @ (OutboxError::NotInitialized | OutboxError::Failed | OutboxError::EmptyTree) => {
                ProtocolError::InvalidState(other.to_string())
            }
        }
    }
}
