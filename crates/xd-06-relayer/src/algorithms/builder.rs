//! # Merkle Tree Builder
//!
//! Mirrors the outbox tree from its dispatch events. The prover serves
//! proofs; the incremental tree is the same structure the outbox keeps, and
//! the two roots are compared after every ingest.

use super::prover::Prover;
use crate::domain::{ProverError, RelayerError};
use shared_types::{short_hex, Hash};
use std::fmt;
use tracing::{debug, instrument};
use xd_02_merkle_accumulator::{IncrementalMerkle, MerkleProof};

/// Prover and incremental tree kept in lockstep.
#[derive(Clone, Debug, Default)]
pub struct MerkleTreeBuilder {
    prover: Prover,
    incremental: IncrementalMerkle,
}

impl fmt::Display for MerkleTreeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MerkleTreeBuilder {{ incremental: {}, prover: {}, count: {} }}",
            short_hex(&self.incremental.root()),
            short_hex(&self.prover.root()),
            self.count()
        )
    }
}

impl MerkleTreeBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaves ingested.
    pub fn count(&self) -> u64 {
        self.prover.count()
    }

    /// Current root.
    pub fn root(&self) -> Hash {
        self.incremental.root()
    }

    /// Root when the last leaf was `index`.
    pub fn root_at(&self, index: u64) -> Option<Hash> {
        (index < self.count()).then(|| self.prover.root_at_size(index + 1))
    }

    /// Ingest the leaf committed at `leaf_index`. Leaves must arrive in
    /// order; a gap means an event was missed.
    #[instrument(level = "debug", skip(self, leaf))]
    pub fn ingest(&mut self, leaf_index: u64, leaf: Hash) -> Result<Hash, RelayerError> {
        let expected = self.count();
        if leaf_index != expected {
            return Err(RelayerError::UnexpectedLeafIndex {
                expected,
                got: leaf_index,
            });
        }

        let prover_root = self.prover.ingest(leaf)?;
        let (incremental_root, _) = self
            .incremental
            .append(leaf)
            .map_err(|_| ProverError::TreeFull)?;

        if prover_root != incremental_root {
            return Err(RelayerError::MismatchedRoots {
                prover_root: short_hex(&prover_root),
                incremental_root: short_hex(&incremental_root),
            });
        }

        debug!("[xd-06] Ingested leaf {} -> root {}", leaf_index, short_hex(&prover_root));
        Ok(prover_root)
    }

    /// Proof of `leaf_index` against the root at `root_index`.
    pub fn get_proof(&self, leaf_index: u64, root_index: u64) -> Result<MerkleProof, RelayerError> {
        Ok(self.prover.prove_against_previous(leaf_index, root_index)?)
    }
}
