//! # Validator Manager Service
//!
//! Owns the current validator set snapshot and the manager identity that
//! outboxes are bound to.

use crate::algorithms::verify_quorum;
use crate::domain::{
    Checkpoint, FraudVerdict, SignatureBytes, SignedCheckpoint, ValidatorManagerError,
    ValidatorSet,
};
use crate::ports::{CheckpointVerifier, HaltableOutbox};
use parking_lot::RwLock;
use shared_types::{short_hex, Address, DomainId, ProtocolResult, ValidatorAddress};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Validator manager.
pub struct ValidatorManager {
    identity: Address,
    set: RwLock<Arc<ValidatorSet>>,
}

impl ValidatorManager {
    /// Create a manager with `identity` and an initial set.
    pub fn new(identity: Address, set: ValidatorSet) -> Self {
        info!(
            "[xd-03] Validator manager {} started with {} validators, threshold {}",
            identity,
            set.len(),
            set.threshold()
        );
        Self {
            identity,
            set: RwLock::new(Arc::new(set)),
        }
    }

    /// Identity outboxes bind to at initialization.
    pub fn identity(&self) -> Address {
        self.identity
    }

    /// Current validator set.
    pub fn snapshot(&self) -> Arc<ValidatorSet> {
        Arc::clone(&self.set.read())
    }

    /// Replace the validator set atomically.
    ///
    /// Verifications already holding a snapshot finish against the old set.
    pub fn rotate(
        &self,
        validators: Vec<ValidatorAddress>,
        threshold: u32,
    ) -> Result<Arc<ValidatorSet>, ValidatorManagerError> {
        let next = Arc::new(ValidatorSet::new(validators, threshold)?);
        let previous = std::mem::replace(&mut *self.set.write(), Arc::clone(&next));

        info!(
            "[xd-03] Rotated validator set: {} -> {} validators, threshold {} -> {}",
            previous.len(),
            next.len(),
            previous.threshold(),
            next.threshold()
        );
        Ok(next)
    }

    /// Verify a checkpoint against the current set.
    pub fn verify(
        &self,
        domain: DomainId,
        checkpoint: &Checkpoint,
        signatures: &[SignatureBytes],
    ) -> Result<Vec<ValidatorAddress>, ValidatorManagerError> {
        let set = self.snapshot();
        let result = verify_quorum(&set, domain, checkpoint, signatures);
        match &result {
            Ok(signers) => debug!(
                "[xd-03] {} on domain {} signed by {}/{} validators",
                checkpoint,
                domain,
                signers.len(),
                set.len()
            ),
            Err(e) => warn!("[xd-03] Rejected {} on domain {}: {}", checkpoint, domain, e),
        }
        result
    }

    /// Halt `outbox`. Fails `Unauthorized` if it is bound to another manager.
    pub fn authorize_fail(
        &self,
        outbox: &mut dyn HaltableOutbox,
    ) -> Result<(), ValidatorManagerError> {
        warn!("[xd-03] Halting outbox on domain {}", outbox.domain());
        outbox.fail(self.identity)?;
        Ok(())
    }

    /// Check a quorum-signed checkpoint against what `outbox` committed.
    ///
    /// Returns `Some(FraudVerdict::Improper)` and halts the outbox when the
    /// checkpoint was never committed; `None` when it was.
    pub fn improper_checkpoint(
        &self,
        outbox: &mut dyn HaltableOutbox,
        signed: &SignedCheckpoint,
    ) -> Result<Option<FraudVerdict>, ValidatorManagerError> {
        self.verify(outbox.domain(), &signed.checkpoint, &signed.signatures)?;

        if outbox.is_checkpoint(&signed.checkpoint) {
            return Ok(None);
        }

        warn!(
            "[xd-03] Improper checkpoint on domain {}: {}",
            outbox.domain(),
            signed.checkpoint
        );
        self.authorize_fail(outbox)?;
        Ok(Some(FraudVerdict::Improper {
            checkpoint: signed.checkpoint,
        }))
    }

    /// Two quorum-signed checkpoints with one index and different roots
    /// halt the outbox.
    pub fn detect_equivocation(
        &self,
        outbox: &mut dyn HaltableOutbox,
        first: &SignedCheckpoint,
        second: &SignedCheckpoint,
    ) -> Result<Option<FraudVerdict>, ValidatorManagerError> {
        if first.index() != second.index() || first.root() == second.root() {
            return Ok(None);
        }

        let domain = outbox.domain();
        self.verify(domain, &first.checkpoint, &first.signatures)?;
        self.verify(domain, &second.checkpoint, &second.signatures)?;

        warn!(
            "[xd-03] Equivocation on domain {} at index {}: {} vs {}",
            domain,
            first.index(),
            short_hex(&first.root()),
            short_hex(&second.root())
        );
        self.authorize_fail(outbox)?;
        Ok(Some(FraudVerdict::Equivocation {
            index: first.index(),
            first_root: first.root(),
            second_root: second.root(),
        }))
    }
}

impl CheckpointVerifier for ValidatorManager {
    fn verify_checkpoint(
        &self,
        domain: DomainId,
        checkpoint: &Checkpoint,
        signatures: &[SignatureBytes],
    ) -> ProtocolResult<()> {
        self.verify(domain, checkpoint, signatures)
            .map(|_| ())
            .map_err(Into::into)
    }
}
