//! # Inbound Ports

use crate::domain::InboxError;
use shared_types::Hash;
use xd_02_merkle_accumulator::ProofPath;
use xd_03_validator_manager::{Checkpoint, SignatureBytes};

/// Inbox API - inbound port.
pub trait InboxApi {
    /// Verify and cache a checkpoint that advances the latest one.
    fn cache_checkpoint(
        &mut self,
        root: Hash,
        index: u64,
        signatures: &[SignatureBytes],
    ) -> Result<(), InboxError>;

    /// Prove and deliver an encoded message.
    fn process(&mut self, message: &[u8], proof: &ProofPath, leaf_index: u64)
        -> Result<(), InboxError>;

    /// Latest cached checkpoint.
    fn latest_checkpoint(&self) -> Option<Checkpoint>;

    /// Whether `leaf_index` was delivered.
    fn is_processed(&self, leaf_index: u64) -> bool;

    /// Number of delivered messages.
    fn processed_count(&self) -> usize;
}
