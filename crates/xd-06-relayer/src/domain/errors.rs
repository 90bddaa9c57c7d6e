//! # Relayer Errors

use shared_crypto::CryptoError;
use thiserror::Error;
use xd_03_validator_manager::ValidatorManagerError;

/// Prover failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProverError {
    /// `2^TREE_DEPTH` leaves ingested.
    #[error("Prover tree full")]
    TreeFull,

    /// Leaf not ingested yet.
    #[error("Leaf {index} out of range, {count} leaves ingested")]
    IndexOutOfRange {
        /// Requested leaf
        index: u64,
        /// Leaves ingested
        count: u64,
    },

    /// Proof requested against a root that does not cover the leaf.
    #[error("Leaf {leaf_index} not covered by root at index {root_index}")]
    InvalidRootIndex {
        /// Requested leaf
        leaf_index: u64,
        /// Requested root index
        root_index: u64,
    },
}

/// Relayer errors.
#[derive(Debug, Error)]
pub enum RelayerError {
    /// Prover rejected an operation.
    #[error(transparent)]
    Prover(#[from] ProverError),

    /// Full tree and incremental tree disagree.
    #[error("Prover root does not match incremental root: {prover_root}, incremental: {incremental_root}")]
    MismatchedRoots {
        /// Root of the full tree
        prover_root: String,
        /// Root of the incremental tree
        incremental_root: String,
    },

    /// Dispatch events arrived out of order.
    #[error("Unexpected leaf index {got}, expected {expected}")]
    UnexpectedLeafIndex {
        /// Next index the builder expects
        expected: u64,
        /// Index received
        got: u64,
    },

    /// Outbox checkpoint does not match the locally rebuilt tree.
    #[error("Checkpoint at index {index} does not match local tree")]
    CheckpointMismatch {
        /// Checkpoint index
        index: u64,
    },

    /// Validator signing failed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// A collected signature was rejected.
    #[error(transparent)]
    Signature(#[from] ValidatorManagerError),

    /// Not enough signers to reach quorum.
    #[error("Quorum not reached: {got} of {required} signatures")]
    QuorumNotReached {
        /// Signatures collected
        got: usize,
        /// Threshold
        required: usize,
    },

    /// The destination side hung up.
    #[error("Relay channel closed")]
    ChannelClosed,
}
