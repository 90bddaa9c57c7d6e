//! # Signature Collector
//!
//! Gathers validator signatures for one checkpoint against one validator
//! set snapshot. Signatures are checked as they arrive so a bad validator
//! cannot poison the packet that goes to the inbox.

use crate::domain::RelayerError;
use shared_crypto::{recover_address, RecoverableSignature};
use shared_types::{DomainId, ValidatorAddress};
use std::collections::HashSet;
use std::sync::Arc;
use xd_03_validator_manager::{
    signing_hash, Checkpoint, SignatureBytes, SignedCheckpoint, ValidatorManagerError,
    ValidatorSet,
};

/// Signatures for a single checkpoint.
#[derive(Debug)]
pub struct SignatureCollector {
    set: Arc<ValidatorSet>,
    domain: DomainId,
    checkpoint: Checkpoint,
    signers: HashSet<ValidatorAddress>,
    signatures: Vec<SignatureBytes>,
}

impl SignatureCollector {
    /// Start collecting for `checkpoint` on `domain`.
    pub fn new(set: Arc<ValidatorSet>, domain: DomainId, checkpoint: Checkpoint) -> Self {
        Self {
            set,
            domain,
            checkpoint,
            signers: HashSet::new(),
            signatures: Vec::new(),
        }
    }

    /// The checkpoint being signed.
    pub fn checkpoint(&self) -> Checkpoint {
        self.checkpoint
    }

    /// Distinct signers so far.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// No signatures yet.
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Threshold reached.
    pub fn is_complete(&self) -> bool {
        self.signatures.len() >= self.set.threshold() as usize
    }

    /// Offer a signature.
    ///
    /// Returns `Ok(true)` if it was kept, `Ok(false)` for a repeat signer or
    /// once the threshold is already met.
    pub fn add(&mut self, signature: SignatureBytes) -> Result<bool, RelayerError> {
        if self.is_complete() {
            return Ok(false);
        }

        let prehash = signing_hash(self.domain, &self.checkpoint);
        let signer = RecoverableSignature::from_slice(&signature)
            .and_then(|sig| recover_address(&prehash, &sig))
            .map_err(|reason| ValidatorManagerError::InvalidSignature {
                position: self.signatures.len(),
                reason,
            })?;

        if !self.set.contains(&signer) {
            return Err(ValidatorManagerError::UnknownSigner {
                signer: format!("0x{}", hex::encode(signer)),
            }
            .into());
        }
        if !self.signers.insert(signer) {
            return Ok(false);
        }

        self.signatures.push(signature);
        Ok(true)
    }

    /// The signed checkpoint, once the threshold is met.
    pub fn finish(self) -> Result<SignedCheckpoint, RelayerError> {
        if !self.is_complete() {
            return Err(RelayerError::QuorumNotReached {
                got: self.signatures.len(),
                required: self.set.threshold() as usize,
            });
        }
        Ok(SignedCheckpoint {
            checkpoint: self.checkpoint,
            signatures: self.signatures,
        })
    }
}
