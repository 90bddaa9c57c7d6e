//! # Domain Errors

use shared_crypto::CryptoError;
use shared_types::ProtocolError;
use thiserror::Error;

/// Validator manager errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorManagerError {
    /// A signature could not be recovered.
    #[error("Signature {position} invalid: {reason}")]
    InvalidSignature {
        /// Position in the submitted list
        position: usize,
        /// Recovery failure
        reason: CryptoError,
    },

    /// A recovered signer is not a member of the set.
    #[error("Signer {signer} is not a validator")]
    UnknownSigner {
        /// Recovered identity (hex)
        signer: String,
    },

    /// The same signer was recovered twice.
    #[error("Duplicate signer {signer}")]
    DuplicateSigner {
        /// Recovered identity (hex)
        signer: String,
    },

    /// Not enough distinct members signed.
    #[error("Insufficient signatures: {got} < {required}")]
    InsufficientSignatures {
        /// Distinct valid signers
        got: usize,
        /// Threshold
        required: usize,
    },

    /// Rotation input rejected.
    #[error("Invalid validator set: {0}")]
    InvalidValidatorSet(String),

    /// Failure reported by the outbox.
    #[error(transparent)]
    Outbox(#[from] ProtocolError),
}

impl From<ValidatorManagerError> for ProtocolError {
    fn from(err: ValidatorManagerError) -> Self {
        match err {
            ValidatorManagerError::InvalidValidatorSet(reason) => {
                ProtocolError::InvalidValidatorSet(reason)
            }
            ValidatorManagerError::Outbox(inner) => inner,
            other => ProtocolError::InvalidCheckpointSignatures(other.to_string()),
        }
    }
}
