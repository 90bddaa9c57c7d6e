//! # Algorithms
//!
//! Checkpoint signing digest and quorum verification.

pub mod digest;
pub mod quorum;

pub use digest::{checkpoint_digest, domain_hash, sign_checkpoint, signing_hash};
pub use quorum::verify_quorum;
