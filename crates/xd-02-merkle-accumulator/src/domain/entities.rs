//! # Proof Entities

use crate::algorithms::branch_root;
use serde::{Deserialize, Serialize};
use shared_types::{Hash, TREE_DEPTH};

/// Sibling path from leaf to root, bottom level first.
pub type ProofPath = [Hash; TREE_DEPTH];

/// Inclusion proof of one leaf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// The proven leaf.
    pub leaf: Hash,
    /// Leaf position in insertion order.
    pub index: u64,
    /// Sibling hashes.
    pub path: ProofPath,
}

impl MerkleProof {
    /// Root this proof reconstructs.
    pub fn root(&self) -> Hash {
        branch_root(&self.leaf, &self.path, self.index)
    }

    /// Whether the proof reconstructs `expected`.
    pub fn verify(&self, expected: &Hash) -> bool {
        self.root() == *expected
    }
}
