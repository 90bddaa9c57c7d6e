//! # Canonical Codec
//!
//! `origin (u32 BE) || sender (32) || destination (u32 BE) || recipient (32) || body`

use crate::algorithms::view::MessageView;
use crate::domain::{CodecError, Message};
use shared_crypto::{keccak256, keccak256_concat};
use shared_types::{Hash, HEADER_LEN};

/// Encode a message into its canonical byte form.
///
/// Does not enforce `MAX_BODY_LEN`; the outbox rejects oversize bodies
/// before a message is ever built.
pub fn encode(message: &Message) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + message.body.len());
    out.extend_from_slice(&message.origin.to_be_bytes());
    out.extend_from_slice(message.sender.as_bytes());
    out.extend_from_slice(&message.destination.to_be_bytes());
    out.extend_from_slice(message.recipient.as_bytes());
    out.extend_from_slice(&message.body);
    out
}

/// Decode canonical bytes.
///
/// # Errors
///
/// - [`CodecError::TooShort`] below the 72-byte header
/// - [`CodecError::BodyTooLarge`] above `MAX_BODY_LEN`
pub fn decode(bytes: &[u8]) -> Result<Message, CodecError> {
    MessageView::new(bytes).map(|view| view.to_message())
}

/// Leaf committed to the accumulator for `message` at `leaf_index`.
pub fn hash_leaf(message: &Message, leaf_index: u64) -> Hash {
    hash_encoded_leaf(&encode(message), leaf_index)
}

/// Leaf hash over already-encoded bytes.
///
/// Equal to [`hash_leaf`] of the decoded message since the encoding is
/// injective.
pub fn hash_encoded_leaf(encoded: &[u8], leaf_index: u64) -> Hash {
    keccak256_concat(&[encoded, leaf_index.to_be_bytes().as_slice()])
}

/// Index-independent message identifier, used for logging.
pub fn message_id(message: &Message) -> Hash {
    keccak256(&encode(message))
}
