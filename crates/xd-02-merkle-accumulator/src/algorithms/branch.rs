//! # Branch Verification
//!
//! Walk a sibling path from leaf to root.
//!
//! # Algorithm
//!
//! For each level `i`:
//! - bit `i` of the index is 1: the node is a right child,
//!   `current = keccak256(sibling || current)`
//! - bit `i` is 0: the node is a left child,
//!   `current = keccak256(current || sibling)`
//!
//! # Time Complexity: O(TREE_DEPTH)

use shared_crypto::keccak256_concat;
use shared_types::{Hash, TREE_DEPTH};

/// `keccak256(left || right)`.
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    keccak256_concat(&[left.as_slice(), right.as_slice()])
}

/// Root reconstructed from `leaf` at `index` with sibling `path`.
pub fn branch_root(leaf: &Hash, path: &[Hash; TREE_DEPTH], index: u64) -> Hash {
    let mut current = *leaf;

    for (level, sibling) in path.iter().enumerate() {
        current = if (index >> level) & 1 == 1 {
            hash_pair(sibling, &current)
        } else {
            hash_pair(&current, sibling)
        };
    }

    current
}
