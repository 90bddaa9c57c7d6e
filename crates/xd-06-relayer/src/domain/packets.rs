//! # Relay Packets and Reports

use serde::{Deserialize, Serialize};
use xd_02_merkle_accumulator::ProofPath;
use xd_03_validator_manager::SignedCheckpoint;

/// Unit carried over the relay channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelayPacket {
    /// Quorum-signed checkpoint for `Inbox::cache_checkpoint`.
    Checkpoint(SignedCheckpoint),
    /// Message plus proof for `Inbox::process`.
    Message {
        /// Encoded message
        message: Vec<u8>,
        /// Sibling path against the preceding checkpoint
        proof: ProofPath,
        /// Leaf index
        leaf_index: u64,
    },
}

/// Origin-side progress of one `Relayer::poll`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelayReport {
    /// Dispatch events ingested
    pub dispatched: usize,
    /// Checkpoints signed and sent
    pub checkpoints: usize,
    /// Message packets sent
    pub messages: usize,
    /// The outbox reported `Failed`
    pub outbox_failed: bool,
}

/// Destination-side outcome of a delivery run.
#[derive(Clone, Debug, Default)]
pub struct DeliveryReport {
    /// Checkpoints cached
    pub checkpoints_cached: usize,
    /// Messages delivered
    pub messages_processed: usize,
    /// Packets rejected for good
    pub rejected: usize,
    /// Packets whose handler failed; may be re-applied later
    pub retryable: Vec<RelayPacket>,
}
