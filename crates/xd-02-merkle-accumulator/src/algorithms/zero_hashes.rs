//! # Zero Hashes
//!
//! Roots of empty subtrees, one per height.

use lazy_static::lazy_static;
use shared_types::{Hash, TREE_DEPTH, ZERO_HASH};

use super::branch::hash_pair;

lazy_static! {
    /// `Z[0] = 0`, `Z[i+1] = keccak256(Z[i] || Z[i])`.
    pub static ref ZERO_HASHES: [Hash; TREE_DEPTH + 1] = {
        let mut hashes = [ZERO_HASH; TREE_DEPTH + 1];
        for i in 0..TREE_DEPTH {
            hashes[i + 1] = hash_pair(&hashes[i], &hashes[i]);
        }
        hashes
    };
}
