//! # Domain Invariants

use super::errors::InboxError;
use xd_03_validator_manager::Checkpoint;

/// Invariant: cached checkpoint indices strictly increase.
pub fn invariant_checkpoint_advances(
    latest: Option<&Checkpoint>,
    index: u64,
) -> Result<(), InboxError> {
    match latest {
        Some(latest) if index <= latest.index => Err(InboxError::StaleCheckpoint {
            index,
            latest: latest.index,
        }),
        _ => Ok(()),
    }
}
