//! # XD-01 Message Codec
//!
//! Canonical wire form and leaf hashing of cross-domain messages.
//!
//! **Subsystem ID:** 01  
//! **Architecture:** Hexagonal (domain + pure algorithms, no ports)
//!
//! ## Wire Format
//!
//! | Offset | Width | Field |
//! |--------|-------|-------|
//! | 0 | 4 | origin domain (u32 BE) |
//! | 4 | 32 | sender |
//! | 36 | 4 | destination domain (u32 BE) |
//! | 40 | 32 | recipient |
//! | 72 | ≤ 2048 | body |
//!
//! The header is fixed width, so the body is exactly the remaining bytes
//! and the encoding is injective.
//!
//! ## Leaf Hash
//!
//! `leaf = keccak256(encode(message) || leaf_index (u64 BE))`
//!
//! Both the outbox (when appending) and the inbox (when proving) compute the
//! leaf through [`hash_leaf`], so the two sides agree bit for bit.
//!
//! ## Module Structure
//!
//! ```text
//! xd-01-message-codec/
//! ├── domain/          # Message, CodecError
//! └── algorithms/      # encode / decode / hash_leaf, zero-copy MessageView
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;

// Re-exports
pub use algorithms::{decode, encode, hash_encoded_leaf, hash_leaf, message_id, MessageView};
pub use domain::{CodecError, Message};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
