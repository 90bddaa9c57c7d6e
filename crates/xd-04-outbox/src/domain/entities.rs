//! # Outbox Entities

use serde::{Deserialize, Serialize};
use shared_types::{DomainId, Hash};

/// Outbox lifecycle. Moves `Active -> Failed` only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutboxStatus {
    /// Accepting dispatches.
    #[default]
    Active,
    /// Halted by the validator manager.
    Failed,
}

impl OutboxStatus {
    /// Guarded transition. Returns `true` on the first call only.
    pub fn fail(&mut self) -> bool {
        match self {
            OutboxStatus::Active => {
                *self = OutboxStatus::Failed;
                true
            }
            OutboxStatus::Failed => false,
        }
    }

    /// Whether dispatch is allowed.
    pub fn is_active(&self) -> bool {
        matches!(self, OutboxStatus::Active)
    }
}

/// Events recorded by the outbox, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutboxEvent {
    /// A message was committed.
    Dispatch {
        /// Leaf hash
        hash: Hash,
        /// Leaf index
        leaf_index: u64,
        /// Destination domain
        destination: DomainId,
        /// Root after the append
        root: Hash,
        /// Encoded message
        message: Vec<u8>,
    },
    /// The outbox was halted.
    Failed,
    /// The current root was recorded as a checkpoint.
    Checkpoint {
        /// Committed root
        root: Hash,
        /// Index of the last leaf under `root`
        index: u64,
    },
}
