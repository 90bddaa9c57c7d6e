//! # Error Types
//!
//! The protocol-wide rejection taxonomy. Every crate-local error converts
//! into [`ProtocolError`]; every variant is an atomic rejection (no state
//! was mutated when it is returned).

use crate::entities::{DomainId, Hash};
use thiserror::Error;

/// Protocol rejection reasons shared by outbox, validator manager and inbox.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// One-time initialization was attempted twice.
    #[error("Already initialized")]
    AlreadyInitialized,

    /// Caller is not allowed to perform the operation.
    #[error("Unauthorized caller")]
    Unauthorized,

    /// Operation is not allowed in the current state.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Message body exceeds `MAX_BODY_LEN`.
    #[error("Message too large: {len} bytes exceeds limit of {max}")]
    MessageTooLarge {
        /// Body length supplied
        len: usize,
        /// Configured limit
        max: usize,
    },

    /// Accumulator holds `2^TREE_DEPTH` leaves.
    #[error("Merkle tree full")]
    TreeFull,

    /// Checkpoint signatures do not meet quorum or are malformed.
    #[error("Invalid checkpoint signatures: {0}")]
    InvalidCheckpointSignatures(String),

    /// Checkpoint does not advance past the cached one.
    #[error("Stale checkpoint: index {index} <= latest {latest}")]
    StaleCheckpoint {
        /// Submitted index
        index: u64,
        /// Currently cached index
        latest: u64,
    },

    /// No checkpoint has been cached yet.
    #[error("No checkpoint cached")]
    NoCheckpoint,

    /// Leaf index is beyond the cached checkpoint.
    #[error("Leaf index {leaf_index} above checkpoint index {checkpoint_index}")]
    IndexTooHigh {
        /// Requested leaf
        leaf_index: u64,
        /// Cached checkpoint index
        checkpoint_index: u64,
    },

    /// Message origin/destination do not match this inbox.
    #[error("Domain mismatch: message {origin}->{destination}, inbox {expected_origin}->{expected_destination}")]
    DomainMismatch {
        /// Message origin
        origin: DomainId,
        /// Message destination
        destination: DomainId,
        /// Inbox origin
        expected_origin: DomainId,
        /// Inbox destination
        expected_destination: DomainId,
    },

    /// Leaf index was already delivered.
    #[error("Leaf {0} already processed")]
    AlreadyProcessed(u64),

    /// Proof does not reconstruct the cached root.
    #[error("Invalid proof: computed root {computed:?}")]
    InvalidProof {
        /// Root the proof reconstructs to
        computed: Hash,
    },

    /// Destination handler rejected the message; retryable.
    #[error("Handler failure: {0}")]
    HandlerFailure(String),

    /// Bytes could not be decoded as a message.
    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    /// Validator set rotation input rejected.
    #[error("Invalid validator set: {0}")]
    InvalidValidatorSet(String),
}

impl ProtocolError {
    /// Whether retrying the same call later can succeed without new input.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::HandlerFailure(_))
    }
}

/// Result alias for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
