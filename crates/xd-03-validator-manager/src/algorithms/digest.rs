//! # Checkpoint Signing Digest
//!
//! ```text
//! domain_hash = keccak256(domain (u32 BE) || "XDMSG")
//! digest      = keccak256(domain_hash || root || index (u64 BE))
//! signed      = keccak256("\x19Ethereum Signed Message:\n32" || digest)
//! ```
//!
//! Binding the domain keeps a signature for one outbox from being replayed
//! against another.

use crate::domain::{Checkpoint, SignatureBytes};
use shared_crypto::{eth_signed_message_hash, keccak256_concat, CryptoError, ValidatorKeyPair};
use shared_types::{DomainId, Hash, CHECKPOINT_DOMAIN_SALT};

/// Per-domain separator.
pub fn domain_hash(domain: DomainId) -> Hash {
    keccak256_concat(&[domain.to_be_bytes().as_slice(), CHECKPOINT_DOMAIN_SALT])
}

/// Digest of a checkpoint on `domain`.
pub fn checkpoint_digest(domain: DomainId, checkpoint: &Checkpoint) -> Hash {
    keccak256_concat(&[
        domain_hash(domain).as_slice(),
        checkpoint.root.as_slice(),
        checkpoint.index.to_be_bytes().as_slice(),
    ])
}

/// The prehash validators actually sign.
pub fn signing_hash(domain: DomainId, checkpoint: &Checkpoint) -> Hash {
    eth_signed_message_hash(&checkpoint_digest(domain, checkpoint))
}

/// Sign a checkpoint on `domain`.
pub fn sign_checkpoint(
    keypair: &ValidatorKeyPair,
    domain: DomainId,
    checkpoint: &Checkpoint,
) -> Result<SignatureBytes, CryptoError> {
    keypair
        .sign_prehash(&signing_hash(domain, checkpoint))
        .map(|sig| sig.to_bytes())
}
