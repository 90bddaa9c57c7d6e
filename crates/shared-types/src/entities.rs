//! # Core Entities
//!
//! Primitive identifiers shared across the workspace.
//!
//! ## Widths
//!
//! - **Hash**: 32-byte keccak256 digest (leaves, roots, message ids)
//! - **Address**: 32-byte application address (sender / recipient)
//! - **ValidatorAddress**: 20-byte secp256k1 identity (keccak of pubkey)
//! - **DomainId**: u32 ledger identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte digest.
pub type Hash = [u8; 32];

/// A 20-byte validator identity, derived from a secp256k1 public key.
pub type ValidatorAddress = [u8; 20];

/// Identifier of one ledger taking part in the protocol.
pub type DomainId = u32;

/// The all-zero digest.
pub const ZERO_HASH: Hash = [0u8; 32];

/// 32-byte application address used for message senders and recipients.
///
/// Ledgers with shorter native addresses left-pad with zeroes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub [u8; 32]);

impl Address {
    /// The zero address.
    pub const ZERO: Address = Address([0u8; 32]);

    /// Create from raw bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Left-pad a 20-byte validator identity into a 32-byte address.
    pub fn from_validator(validator: ValidatorAddress) -> Self {
        let mut bytes = [0u8; 32];
        bytes[12..].copy_from_slice(&validator);
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the trailing 20 bytes if the leading 12 are zero.
    pub fn to_validator(&self) -> Option<ValidatorAddress> {
        if self.0[..12].iter().any(|b| *b != 0) {
            return None;
        }
        let mut out = [0u8; 20];
        out.copy_from_slice(&self.0[12..]);
        Some(out)
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 32] {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Short hex rendering of a digest for log lines (`0xabcd…ef01`).
pub fn short_hex(hash: &Hash) -> String {
    format!(
        "0x{}…{}",
        hex::encode(&hash[..2]),
        hex::encode(&hash[30..])
    )
}
