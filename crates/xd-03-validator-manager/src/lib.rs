//! # XD-03 Validator Manager
//!
//! Holds the validator set, verifies checkpoint signatures and is the sole
//! authority allowed to halt an outbox.
//!
//! **Subsystem ID:** 03  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Checkpoint Validity
//!
//! A checkpoint `(root, index)` for a domain is valid iff its signatures,
//! recovered against the signing digest, name at least `threshold`
//! distinct members of the current validator set.
//!
//! | Rejection | Cause |
//! |-----------|-------|
//! | Malformed signature | bad scalars, high S, bad recovery id |
//! | Unknown signer | recovered identity not in the set |
//! | Duplicate signer | same identity recovered twice |
//! | Insufficient signatures | fewer than `threshold` distinct members |
//!
//! ## Snapshot Model
//!
//! The set lives behind `RwLock<Arc<ValidatorSet>>`. A verification clones
//! the `Arc` once and checks every signature against that snapshot; a
//! rotation swaps the pointer. No verification observes a mixed set.
//!
//! ## Fraud
//!
//! - **Improper checkpoint**: quorum-signed `(root, index)` the outbox never
//!   committed.
//! - **Equivocation**: two quorum-signed checkpoints with the same index and
//!   different roots.
//!
//! Either one fails the outbox through [`ports::HaltableOutbox`].
//!
//! ## Module Structure
//!
//! ```text
//! xd-03-validator-manager/
//! ├── domain/          # ValidatorSet, Checkpoint, FraudVerdict, errors
//! ├── algorithms/      # signing digest, quorum verification
//! ├── ports/           # CheckpointVerifier (inbound), HaltableOutbox (outbound)
//! └── application/     # ValidatorManager service
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod application;
pub mod domain;
pub mod ports;

// Re-exports
pub use algorithms::{checkpoint_digest, domain_hash, sign_checkpoint, signing_hash, verify_quorum};
pub use application::ValidatorManager;
pub use domain::{
    invariant_threshold_bounds, invariant_unique_validators, Checkpoint, FraudVerdict,
    SignatureBytes, SignedCheckpoint, ValidatorManagerError, ValidatorSet,
};
pub use ports::{CheckpointVerifier, HaltableOutbox, MockOutbox};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
