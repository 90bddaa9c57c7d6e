//! # Algorithms Module
//!
//! - `prover`: full tree serving proofs against current and past roots
//! - `builder`: prover plus incremental tree kept in lockstep
//! - `collector`: per-checkpoint signature gathering up to quorum

pub mod builder;
pub mod collector;
pub mod prover;

pub use builder::MerkleTreeBuilder;
pub use collector::SignatureCollector;
pub use prover::Prover;
