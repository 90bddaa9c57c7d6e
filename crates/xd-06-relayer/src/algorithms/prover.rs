//! # Prover
//!
//! Keeps every leaf plus every complete interior node so that proofs can be
//! served against the current root or any earlier one.
//!
//! # Algorithm
//!
//! `levels[h]` holds the nodes at height `h` whose subtree is full. A node
//! at `(h, p)` covers leaves `[p * 2^h, (p + 1) * 2^h)`. For a tree of
//! `size` leaves:
//! - range starts at or beyond `size`: the zero hash of height `h`
//! - range ends at or before `size`: the stored complete node
//! - otherwise the node straddles the frontier and is hashed from its
//!   children
//!
//! Only one node per height straddles the frontier, so a root costs
//! O(TREE_DEPTH) hashes and a proof O(TREE_DEPTH²).

use crate::domain::ProverError;
use shared_types::{Hash, MAX_LEAVES, TREE_DEPTH, ZERO_HASH};
use xd_02_merkle_accumulator::{hash_pair, MerkleProof, ProofPath, ZERO_HASHES};

/// Full Merkle tree with historical proofs.
#[derive(Clone, Debug)]
pub struct Prover {
    levels: Vec<Vec<Hash>>,
}

impl Default for Prover {
    fn default() -> Self {
        Self::new()
    }
}

impl Prover {
    /// Empty prover.
    pub fn new() -> Self {
        Self {
            levels: vec![Vec::new(); TREE_DEPTH + 1],
        }
    }

    /// Leaves ingested.
    pub fn count(&self) -> u64 {
        self.levels[0].len() as u64
    }

    /// Leaf at `index`, if ingested.
    pub fn leaf(&self, index: u64) -> Option<Hash> {
        self.levels[0].get(index as usize).copied()
    }

    /// Append a leaf and return the new root.
    pub fn ingest(&mut self, leaf: Hash) -> Result<Hash, ProverError> {
        if self.count() >= MAX_LEAVES {
            return Err(ProverError::TreeFull);
        }

        self.levels[0].push(leaf);
        for height in 0..TREE_DEPTH {
            let len = self.levels[height].len();
            if len % 2 == 1 {
                break;
            }
            let parent = hash_pair(&self.levels[height][len - 2], &self.levels[height][len - 1]);
            self.levels[height + 1].push(parent);
        }

        Ok(self.root())
    }

    /// Current root.
    pub fn root(&self) -> Hash {
        self.root_at_size(self.count())
    }

    /// Root of the tree when it held `size` leaves.
    pub fn root_at_size(&self, size: u64) -> Hash {
        self.node(TREE_DEPTH, 0, size.min(self.count()))
    }

    /// Proof of `index` against the current root.
    pub fn prove(&self, index: u64) -> Result<MerkleProof, ProverError> {
        let count = self.count();
        if count == 0 {
            return Err(ProverError::IndexOutOfRange { index, count });
        }
        self.prove_against_previous(index, count - 1)
    }

    /// Proof of `leaf_index` against the root the tree had when its last
    /// leaf was `root_index`.
    pub fn prove_against_previous(
        &self,
        leaf_index: u64,
        root_index: u64,
    ) -> Result<MerkleProof, ProverError> {
        let count = self.count();
        if leaf_index >= count {
            return Err(ProverError::IndexOutOfRange {
                index: leaf_index,
                count,
            });
        }
        if root_index < leaf_index || root_index >= count {
            return Err(ProverError::InvalidRootIndex {
                leaf_index,
                root_index,
            });
        }

        let size = root_index + 1;
        let mut path: ProofPath = [ZERO_HASH; TREE_DEPTH];
        for (height, sibling) in path.iter_mut().enumerate() {
            *sibling = self.node(height, (leaf_index >> height) ^ 1, size);
        }

        Ok(MerkleProof {
            leaf: self.levels[0][leaf_index as usize],
            index: leaf_index,
            path,
        })
    }

    fn node(&self, height: usize, position: u64, size: u64) -> Hash {
        let start = position << height;
        if start >= size {
            return ZERO_HASHES[height];
        }
        if start + (1u64 << height) <= size {
            if let Some(node) = self.levels[height].get(position as usize) {
                return *node;
            }
        }
        // Straddles the frontier. Height 0 never gets here since a leaf
        // below `size` is always stored.
        let left = self.node(height - 1, position << 1, size);
        let right = self.node(height - 1, (position << 1) | 1, size);
        hash_pair(&left, &right)
    }
}
