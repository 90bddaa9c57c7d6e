//! # Inbound Ports

use crate::domain::{Checkpoint, SignatureBytes};
use shared_types::{DomainId, ProtocolResult};

/// Checkpoint verification - inbound port.
///
/// Implemented by the validator manager; inboxes hold it as a trait object
/// so tests can substitute a fixed verdict.
pub trait CheckpointVerifier: Send + Sync {
    /// Accept iff `signatures` form a quorum over `checkpoint` on `domain`.
    fn verify_checkpoint(
        &self,
        domain: DomainId,
        checkpoint: &Checkpoint,
        signatures: &[SignatureBytes],
    ) -> ProtocolResult<()>;
}
