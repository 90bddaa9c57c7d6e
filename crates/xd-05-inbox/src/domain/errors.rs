//! # Domain Errors

use shared_types::{short_hex, Address, DomainId, Hash, ProtocolError};
use thiserror::Error;
use xd_01_message_codec::CodecError;

/// Inbox errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InboxError {
    /// Checkpoint rejected by the verifier.
    #[error("Checkpoint verification failed: {0}")]
    Verification(ProtocolError),

    /// Checkpoint does not advance the cached one.
    #[error("Stale checkpoint: index {index} <= latest {latest}")]
    StaleCheckpoint {
        /// Submitted index
        index: u64,
        /// Cached index
        latest: u64,
    },

    /// Nothing cached yet.
    #[error("No checkpoint cached")]
    NoCheckpoint,

    /// Leaf beyond the cached checkpoint.
    #[error("Leaf index {leaf_index} above checkpoint index {checkpoint_index}")]
    IndexTooHigh {
        /// Requested leaf
        leaf_index: u64,
        /// Cached index
        checkpoint_index: u64,
    },

    /// Bytes are not a message.
    #[error(transparent)]
    Malformed(#[from] CodecError),

    /// Message is for another domain pair.
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

    /// Leaf already delivered.
    #[error("Leaf {0} already processed")]
    AlreadyProcessed(u64),

    /// Proof does not reconstruct the cached root.
    #[error("Invalid proof: computed root {}", short_hex(.computed))]
    InvalidProof {
        /// Reconstructed root
        computed: Hash,
    },

    /// No handler registered for the recipient.
    #[error("Unknown recipient {0}")]
    UnknownRecipient(Address),

    /// Recipient handler returned an error.
    #[error("Handler for {recipient} failed: {reason}")]
    HandlerFailed {
        /// Recipient address
        recipient: Address,
        /// Handler error
        reason: String,
    },
}

impl InboxError {
    /// Whether the same call may succeed later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::UnknownRecipient(_) | Self::HandlerFailed { .. })
    }
}

impl From<InboxError> for ProtocolError {
    fn from(err: InboxError) -> Self {
        match err {
            InboxError::Verification(inner) => inner,
            InboxError::StaleCheckpoint { index, latest } => {
                ProtocolError::StaleCheckpoint { index, latest }
            }
            InboxError::NoCheckpoint => ProtocolError::NoCheckpoint,
            InboxError::IndexTooHigh {
                leaf_index,
                checkpoint_index,
            } => ProtocolError::IndexTooHigh {
                leaf_index,
                checkpoint_index,
            },
            InboxError::Malformed(inner) => inner.into(),
            InboxError::DomainMismatch {
                origin,
                destination,
                expected_origin,
                expected_destination,
            } => ProtocolError::DomainMismatch {
                origin,
                destination,
                expected_origin,
                expected_destination,
            },
            InboxError::AlreadyProcessed(index) => ProtocolError::AlreadyProcessed(index),
            InboxError::InvalidProof { computed } => ProtocolError::InvalidProof { computed },
            other @ (InboxError::UnknownRecipient(_) | InboxError::HandlerFailed { .. }) => {
                ProtocolError::HandlerFailure(other.to_string())
            }
        }
    }
}
