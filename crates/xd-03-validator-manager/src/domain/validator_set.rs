//! # Validator Set
//!
//! Ordered validator identities plus the quorum threshold. Immutable once
//! built: rotation replaces the whole set.

use super::errors::ValidatorManagerError;
use super::invariants::{invariant_threshold_bounds, invariant_unique_validators};
use serde::{Deserialize, Serialize};
use shared_types::ValidatorAddress;
use std::collections::HashSet;

/// Validator identities and quorum threshold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ValidatorSetRepr", into = "ValidatorSetRepr")]
pub struct ValidatorSet {
    validators: Vec<ValidatorAddress>,
    members: HashSet<ValidatorAddress>,
    threshold: u32,
}

#[derive(Serialize, Deserialize)]
struct ValidatorSetRepr {
    validators: Vec<ValidatorAddress>,
    threshold: u32,
}

impl ValidatorSet {
    /// Build a set, enforcing `1 <= threshold <= len` and uniqueness.
    pub fn new(
        validators: Vec<ValidatorAddress>,
        threshold: u32,
    ) -> Result<Self, ValidatorManagerError> {
        invariant_threshold_bounds(validators.len(), threshold)?;
        invariant_unique_validators(&validators)?;

        let members = validators.iter().copied().collect();
        Ok(Self {
            validators,
            members,
            threshold,
        })
    }

    /// Build a set with [`ValidatorSet::default_threshold`].
    pub fn with_default_threshold(
        validators: Vec<ValidatorAddress>,
    ) -> Result<Self, ValidatorManagerError> {
        let threshold = Self::default_threshold(validators.len());
        Self::new(validators, threshold)
    }

    /// Two thirds plus one of `n`.
    pub fn default_threshold(n: usize) -> u32 {
        (((n * 10 / 3) * 2) / 10 + 1) as u32
    }

    /// Whether `validator` is a member.
    pub fn contains(&self, validator: &ValidatorAddress) -> bool {
        self.members.contains(validator)
    }

    /// Members in insertion order.
    pub fn validators(&self) -> &[ValidatorAddress] {
        &self.validators
    }

    /// Quorum threshold.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Always false for a set that passed validation.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl TryFrom<ValidatorSetRepr> for ValidatorSet {
    type Error = ValidatorManagerError;

    fn try_from(repr: ValidatorSetRepr) -> Result<Self, Self::Error> {
        ValidatorSet::new(repr.validators, repr.threshold)
    }
}

impl From<ValidatorSet> for ValidatorSetRepr {
    fn from(set: ValidatorSet) -> Self {
        Self {
            validators: set.validators,
            threshold: set.threshold,
        }
    }
}
