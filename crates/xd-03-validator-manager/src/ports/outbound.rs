//! # Outbound Ports
//!
//! The outbox surface the manager needs. The outbox crate implements it,
//! which keeps the dependency pointing from outbox to manager.

use crate::domain::Checkpoint;
use shared_types::{Address, DomainId, ProtocolError, ProtocolResult};

/// An outbox the manager may halt.
pub trait HaltableOutbox {
    /// Origin domain of the outbox.
    fn domain(&self) -> DomainId;

    /// Halt the outbox; `caller` must be its bound manager.
    fn fail(&mut self, caller: Address) -> ProtocolResult<()>;

    /// Whether the outbox committed `checkpoint`.
    fn is_checkpoint(&self, checkpoint: &Checkpoint) -> bool;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock outbox for testing.
#[derive(Clone, Debug, Default)]
pub struct MockOutbox {
    /// Origin domain.
    pub domain: DomainId,
    /// Manager allowed to halt it.
    pub manager: Address,
    /// Committed checkpoints.
    pub checkpoints: Vec<Checkpoint>,
    /// Halted?
    pub failed: bool,
    /// Number of `fail` calls accepted.
    pub fail_calls: usize,
}

impl MockOutbox {
    /// Mock bound to `manager` on `domain`.
    pub fn new(domain: DomainId, manager: Address) -> Self {
        Self {
            domain,
            manager,
            ..Default::default()
        }
    }
}

impl HaltableOutbox for MockOutbox {
    fn domain(&self) -> DomainId {
        self.domain
    }

    fn fail(&mut self, caller: Address) -> ProtocolResult<()> {
        if caller != self.manager {
            return Err(ProtocolError::Unauthorized);
        }
        self.failed = true;
        self.fail_calls += 1;
        Ok(())
    }

    fn is_checkpoint(&self, checkpoint: &Checkpoint) -> bool {
        self.checkpoints.contains(checkpoint)
    }
}
