//! # Algorithms
//!
//! Zero hashes, incremental insertion and branch verification.

pub mod branch;
pub mod incremental;
pub mod zero_hashes;

pub use branch::{branch_root, hash_pair};
pub use incremental::IncrementalMerkle;
pub use zero_hashes::ZERO_HASHES;
