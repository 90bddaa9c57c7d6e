//! # Quorum Verification
//!
//! Every signature must recover to a distinct member of one validator set
//! snapshot, and the distinct signers must reach the threshold. A single
//! bad signature rejects the whole checkpoint.

use super::digest::signing_hash;
use crate::domain::{Checkpoint, SignatureBytes, ValidatorManagerError, ValidatorSet};
use shared_crypto::{recover_address, RecoverableSignature};
use shared_types::{DomainId, ValidatorAddress};
use std::collections::HashSet;

/// Verify `signatures` over `checkpoint` on `domain` against `set`.
///
/// Returns the recovered signers in submission order.
pub fn verify_quorum(
    set: &ValidatorSet,
    domain: DomainId,
    checkpoint: &Checkpoint,
    signatures: &[SignatureBytes],
) -> Result<Vec<ValidatorAddress>, ValidatorManagerError> {
    let prehash = signing_hash(domain, checkpoint);
    let mut seen = HashSet::with_capacity(signatures.len());
    let mut signers = Vec::with_capacity(signatures.len());

    for (position, raw) in signatures.iter().enumerate() {
        let signer = RecoverableSignature::from_slice(raw)
            .and_then(|sig| recover_address(&prehash, &sig))
            .map_err(|reason| ValidatorManagerError::InvalidSignature { position, reason })?;

        if !set.contains(&signer) {
            return Err(ValidatorManagerError::UnknownSigner {
                signer: format!("0x{}", hex::encode(signer)),
            });
        }
        if !seen.insert(signer) {
            return Err(ValidatorManagerError::DuplicateSigner {
                signer: format!("0x{}", hex::encode(signer)),
            });
        }
        signers.push(signer);
    }

    let required = set.threshold() as usize;
    if signers.len() < required {
        return Err(ValidatorManagerError::InsufficientSignatures {
            got: signers.len(),
            required,
        });
    }

    Ok(signers)
}
