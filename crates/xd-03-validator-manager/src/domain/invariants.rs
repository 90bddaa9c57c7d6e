//! # Domain Invariants
//!
//! Rules every validator set must satisfy.

use super::errors::ValidatorManagerError;
use shared_types::ValidatorAddress;
use std::collections::HashSet;

/// Invariant: `1 <= threshold <= validators`.
pub fn invariant_threshold_bounds(
    validators: usize,
    threshold: u32,
) -> Result<(), ValidatorManagerError> {
    if threshold == 0 {
        return Err(ValidatorManagerError::InvalidValidatorSet(
            "threshold must be at least 1".into(),
        ));
    }
    if threshold as usize > validators {
        return Err(ValidatorManagerError::InvalidValidatorSet(format!(
            "threshold {threshold} exceeds {validators} validators"
        )));
    }
    Ok(())
}

/// Invariant: no validator appears twice.
pub fn invariant_unique_validators(
    validators: &[ValidatorAddress],
) -> Result<(), ValidatorManagerError> {
    let mut seen = HashSet::with_capacity(validators.len());
    for validator in validators {
        if !seen.insert(validator) {
            return Err(ValidatorManagerError::InvalidValidatorSet(format!(
                "duplicate validator 0x{}",
                hex::encode(validator)
            )));
        }
    }
    Ok(())
}
