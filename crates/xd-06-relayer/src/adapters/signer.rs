//! # Checkpoint Signer
//!
//! Validator agent: watches the origin outbox and signs its checkpoints.

use shared_crypto::{CryptoError, ValidatorKeyPair};
use shared_types::{DomainId, ValidatorAddress};
use tracing::debug;
use xd_03_validator_manager::{sign_checkpoint, Checkpoint, SignatureBytes};

/// Signs checkpoints of one origin domain.
pub struct CheckpointSigner {
    keypair: ValidatorKeyPair,
    domain: DomainId,
}

impl CheckpointSigner {
    /// Signer for checkpoints of `domain`.
    pub fn new(keypair: ValidatorKeyPair, domain: DomainId) -> Self {
        Self { keypair, domain }
    }

    /// Validator address.
    pub fn address(&self) -> ValidatorAddress {
        self.keypair.address()
    }

    /// Domain the signer attests to.
    pub fn domain(&self) -> DomainId {
        self.domain
    }

    /// Sign `checkpoint`.
    pub fn sign(&self, checkpoint: &Checkpoint) -> Result<SignatureBytes, CryptoError> {
        let signature = sign_checkpoint(&self.keypair, self.domain, checkpoint)?;
        debug!(
            "[xd-06] Validator 0x{} signed {}",
            hex::encode(self.address()),
            checkpoint
        );
        Ok(signature)
    }
}

impl std::fmt::Debug for CheckpointSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckpointSigner")
            .field("address", &hex::encode(self.address()))
            .field("domain", &self.domain)
            .finish()
    }
}
