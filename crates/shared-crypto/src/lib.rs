//! # Shared Crypto - Hashing and Validator Signatures
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak-256 | Leaves, tree nodes, checkpoint digests |
//! | `ecdsa` | secp256k1 (recoverable) | Validator checkpoint signatures |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic nonces, low-S normalization (EIP-2)
//! - **Recovery**: signer identity is recovered from the signature, so a
//!   checkpoint carries no public keys
//! - **Scalar checks**: r and s must lie in [1, n-1], s in the lower half

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{
    address_from_pubkey, recover_address, RecoverableSignature, ValidatorKeyPair,
    SIGNATURE_LEN,
};
pub use errors::CryptoError;
pub use hashing::{eth_signed_message_hash, keccak256, keccak256_concat, Keccak256Hasher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
