//! # XD-02 Merkle Accumulator
//!
//! Incremental, append-only Merkle tree of depth 32 over keccak256.
//!
//! **Subsystem ID:** 02  
//! **Architecture:** Hexagonal (domain + pure algorithms)
//!
//! ## State
//!
//! The accumulator keeps `count` and one pending node per level
//! (`branch[0..TREE_DEPTH]`). Leaves themselves are never stored: appends and
//! root computation are O(TREE_DEPTH), and inclusion proofs are rebuilt by an
//! indexer that replays the append history (see the relayer's `Prover`).
//!
//! ## Zero Hashes
//!
//! | Level | Value |
//! |-------|-------|
//! | `Z[0]` | `0x00…00` |
//! | `Z[i+1]` | `keccak256(Z[i] ‖ Z[i])` |
//!
//! `Z[i]` is the root of an empty subtree of height `i`; the empty tree's
//! root is `Z[32]`.
//!
//! ## Module Structure
//!
//! ```text
//! xd-02-merkle-accumulator/
//! ├── domain/          # MerkleProof, AccumulatorError
//! └── algorithms/      # zero hashes, IncrementalMerkle, branch_root
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;

// Re-exports
pub use algorithms::{branch_root, hash_pair, IncrementalMerkle, ZERO_HASHES};
pub use domain::{AccumulatorError, MerkleProof, ProofPath};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
