//! # Incremental Merkle Tree
//!
//! Append-only accumulator holding one pending node per level.
//!
//! # Algorithm (append)
//!
//! With `size = count + 1`, walk levels from the bottom. At the first level
//! whose bit of `size` is 1 the carried node becomes that level's pending
//! value. Below it, each level combines `keccak256(branch[i] || node)` and
//! carries upwards.
//!
//! # Algorithm (root)
//!
//! Walk levels from the bottom with `size = count`: a set bit combines the
//! pending left node, a clear bit pads with the zero hash of that height.

use super::branch::hash_pair;
use super::zero_hashes::ZERO_HASHES;
use crate::domain::AccumulatorError;
use serde::{Deserialize, Serialize};
use shared_types::{Hash, MAX_LEAVES, TREE_DEPTH, ZERO_HASH};

/// Compact accumulator state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IncrementalMerkleRepr", into = "IncrementalMerkleRepr")]
pub struct IncrementalMerkle {
    branch: [Hash; TREE_DEPTH],
    count: u64,
    /// Root once all `2^TREE_DEPTH` leaves are in; the final carry has no
    /// level left to rest in.
    sealed_root: Option<Hash>,
}

#[derive(Serialize, Deserialize)]
struct IncrementalMerkleRepr {
    branch: [Hash; TREE_DEPTH],
    count: u64,
    sealed_root: Option<Hash>,
}

impl TryFrom<IncrementalMerkleRepr> for IncrementalMerkle {
    type Error = AccumulatorError;

    fn try_from(repr: IncrementalMerkleRepr) -> Result<Self, Self::Error> {
        if repr.count > MAX_LEAVES {
            return Err(AccumulatorError::InconsistentState(format!(
                "count {} exceeds capacity {}",
                repr.count, MAX_LEAVES
            )));
        }
        // Sealed exactly when the last leaf went in.
        if repr.sealed_root.is_some() != (repr.count == MAX_LEAVES) {
            return Err(AccumulatorError::InconsistentState(format!(
                "sealed root {} at count {}",
                if repr.sealed_root.is_some() { "present" } else { "missing" },
                repr.count
            )));
        }
        Ok(Self {
            branch: repr.branch,
            count: repr.count,
            sealed_root: repr.sealed_root,
        })
    }
}

impl From<IncrementalMerkle> for IncrementalMerkleRepr {
    fn from(tree: IncrementalMerkle) -> Self {
        Self {
            branch: tree.branch,
            count: tree.count,
            sealed_root: tree.sealed_root,
        }
    }
}

impl Default for IncrementalMerkle {
    fn default() -> Self {
        Self::new()
    }
}

impl IncrementalMerkle {
    /// Empty tree.
    pub fn new() -> Self {
        Self {
            branch: [ZERO_HASH; TREE_DEPTH],
            count: 0,
            sealed_root: None,
        }
    }

    /// Append a leaf, returning the new root and the leaf's index.
    ///
    /// # Errors
    ///
    /// [`AccumulatorError::TreeFull`] once `count == 2^TREE_DEPTH`. The
    /// state is unchanged on error.
    pub fn append(&mut self, leaf: Hash) -> Result<(Hash, u64), AccumulatorError> {
        if self.is_full() {
            return Err(AccumulatorError::TreeFull {
                capacity: MAX_LEAVES,
            });
        }

        let index = self.count;
        self.count += 1;

        let mut node = leaf;
        let mut size = self.count;
        let mut placed = false;
        for level in 0..TREE_DEPTH {
            if size & 1 == 1 {
                self.branch[level] = node;
                placed = true;
                break;
            }
            node = hash_pair(&self.branch[level], &node);
            size >>= 1;
        }
        if !placed {
            self.sealed_root = Some(node);
        }

        Ok((self.root(), index))
    }

    /// Current root.
    pub fn root(&self) -> Hash {
        if let Some(root) = self.sealed_root {
            return root;
        }

        let mut node = ZERO_HASH;
        let mut size = self.count;
        for level in 0..TREE_DEPTH {
            node = if size & 1 == 1 {
                hash_pair(&self.branch[level], &node)
            } else {
                hash_pair(&node, &ZERO_HASHES[level])
            };
            size >>= 1;
        }
        node
    }

    /// Number of leaves appended.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Whether no further leaf fits.
    pub fn is_full(&self) -> bool {
        self.count >= MAX_LEAVES
    }

    /// Pending node per level.
    pub fn branch(&self) -> &[Hash; TREE_DEPTH] {
        &self.branch
    }
}
