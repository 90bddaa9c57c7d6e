//! # Protocol Constants
//!
//! Values every participant on every domain must agree on. Changing any of
//! them changes leaf hashes and roots, so they are fixed at compile time.

/// Depth of the outbox Merkle accumulator.
pub const TREE_DEPTH: usize = 32;

/// Maximum number of leaves an accumulator can hold (2^TREE_DEPTH).
pub const MAX_LEAVES: u64 = 1 << TREE_DEPTH;

/// Maximum message body length in bytes.
pub const MAX_BODY_LEN: usize = 2 * 1024;

/// Width of the fixed message header:
/// origin (4) + sender (32) + destination (4) + recipient (32).
pub const HEADER_LEN: usize = 4 + 32 + 4 + 32;

/// Salt mixed into the checkpoint signing domain hash.
pub const CHECKPOINT_DOMAIN_SALT: &[u8] = b"XDMSG";
