//! # Inbound Ports
//!
//! What applications and operators can do with an outbox.

use crate::domain::{OutboxError, OutboxStatus};
use shared_types::{Address, DomainId, Hash};
use xd_03_validator_manager::Checkpoint;

/// Outbox API - inbound port.
pub trait OutboxApi {
    /// Bind the validator manager. One-time.
    fn initialize(&mut self, validator_manager: Address) -> Result<(), OutboxError>;

    /// Commit a message from `caller`, returning its leaf index.
    fn dispatch(
        &mut self,
        caller: Address,
        destination: DomainId,
        recipient: Address,
        body: Vec<u8>,
    ) -> Result<u64, OutboxError>;

    /// Halt the outbox. Only the bound manager may call it.
    fn fail(&mut self, caller: Address) -> Result<(), OutboxError>;

    /// Record the current root as a checkpoint.
    fn checkpoint(&mut self) -> Result<Checkpoint, OutboxError>;

    /// Whether `(root, index)` was recorded by [`OutboxApi::checkpoint`].
    fn is_checkpoint(&self, root: &Hash, index: u64) -> bool;

    /// Latest recorded checkpoint.
    fn latest_checkpoint(&self) -> Option<Checkpoint>;

    /// Leaves committed so far.
    fn count(&self) -> u64;

    /// Current accumulator root.
    fn root(&self) -> Hash;

    /// Lifecycle status.
    fn status(&self) -> OutboxStatus;

    /// Origin domain.
    fn domain(&self) -> DomainId;
}
