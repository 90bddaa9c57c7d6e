//! # Checkpoints
//!
//! An attestation that an outbox's tree had `root` once it held
//! `index + 1` leaves.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use shared_crypto::SIGNATURE_LEN;
use shared_types::{short_hex, Hash};
use std::fmt;

/// Raw recoverable signature, `r || s || v`.
pub type SignatureBytes = [u8; SIGNATURE_LEN];

/// `(root, index)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Accumulator root.
    pub root: Hash,
    /// Index of the last leaf covered by `root`.
    pub index: u64,
}

impl Checkpoint {
    /// Create a checkpoint.
    pub fn new(root: Hash, index: u64) -> Self {
        Self { root, index }
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checkpoint {{ root: {}, index: {} }}", short_hex(&self.root), self.index)
    }
}

/// Checkpoint plus validator signatures.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedCheckpoint {
    /// The attested checkpoint.
    pub checkpoint: Checkpoint,
    /// Signatures over the checkpoint's signing hash.
    #[serde_as(as = "Vec<Bytes>")]
    pub signatures: Vec<SignatureBytes>,
}

impl SignedCheckpoint {
    /// Checkpoint with no signatures yet.
    pub fn unsigned(checkpoint: Checkpoint) -> Self {
        Self {
            checkpoint,
            signatures: Vec::new(),
        }
    }

    /// Root shortcut.
    pub fn root(&self) -> Hash {
        self.checkpoint.root
    }

    /// Index shortcut.
    pub fn index(&self) -> u64 {
        self.checkpoint.index
    }
}

/// Proven misbehaviour that halted an outbox.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FraudVerdict {
    /// Validators signed a checkpoint the outbox never committed.
    Improper {
        /// The signed checkpoint
        checkpoint: Checkpoint,
    },
    /// Validators signed two roots for one index.
    Equivocation {
        /// Shared index
        index: u64,
        /// First signed root
        first_root: Hash,
        /// Second signed root
        second_root: Hash,
    },
}
