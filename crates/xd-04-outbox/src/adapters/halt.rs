//! # Validator Manager Adapter
//!
//! Exposes the outbox to the validator manager's outbound port.

use crate::application::Outbox;
use crate::ports::OutboxApi;
use shared_types::{Address, DomainId, ProtocolResult};
use xd_03_validator_manager::{Checkpoint, HaltableOutbox};

impl HaltableOutbox for Outbox {
    fn domain(&self) -> DomainId {
        OutboxApi::domain(self)
    }

    fn fail(&mut self, caller: Address) -> ProtocolResult<()> {
        OutboxApi::fail(self, caller).map_err(Into::into)
    }

    fn is_checkpoint(&self, checkpoint: &Checkpoint) -> bool {
        OutboxApi::is_checkpoint(self, &checkpoint.root, checkpoint.index)
    }
}
