//! # Keccak-256 Hashing
//!
//! The single hash function of the protocol: message leaves, interior tree
//! nodes, zero hashes and checkpoint digests all use Keccak-256.

use sha3::{Digest, Keccak256};
use shared_types::Hash;

/// Prefix prepended by `eth_sign` style signers.
const ETH_SIGNED_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Stateful Keccak-256 hasher.
#[derive(Clone, Default)]
pub struct Keccak256Hasher {
    inner: Keccak256,
}

impl Keccak256Hasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Keccak256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(self) -> Hash {
        self.inner.finalize().into()
    }
}

/// Hash data with Keccak-256 (one-shot).
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// Hash the concatenation of several inputs without allocating.
pub fn keccak256_concat(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Keccak256Hasher::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize()
}

/// `keccak256("\x19Ethereum Signed Message:\n32" || digest)`.
pub fn eth_signed_message_hash(digest: &Hash) -> Hash {
    keccak256_concat(&[ETH_SIGNED_PREFIX, digest.as_slice()])
}
