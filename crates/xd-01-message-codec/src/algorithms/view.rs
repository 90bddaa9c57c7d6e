//! # Zero-Copy Message View
//!
//! Field accessors over encoded bytes, for routing a message without
//! copying the body.

use crate::domain::{CodecError, Message};
use shared_types::{Address, DomainId, HEADER_LEN, MAX_BODY_LEN};

const ORIGIN: usize = 0;
const SENDER: usize = 4;
const DESTINATION: usize = 36;
const RECIPIENT: usize = 40;

/// Borrowed, length-checked view of an encoded message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageView<'a> {
    bytes: &'a [u8],
}

impl<'a> MessageView<'a> {
    /// Validate lengths and wrap the bytes.
    pub fn new(bytes: &'a [u8]) -> Result<Self, CodecError> {
        if bytes.len() < HEADER_LEN {
            return Err(CodecError::TooShort {
                len: bytes.len(),
                header: HEADER_LEN,
            });
        }
        let body_len = bytes.len() - HEADER_LEN;
        if body_len > MAX_BODY_LEN {
            return Err(CodecError::BodyTooLarge {
                len: body_len,
                max: MAX_BODY_LEN,
            });
        }
        Ok(Self { bytes })
    }

    /// Origin domain.
    pub fn origin(&self) -> DomainId {
        read_u32(self.bytes, ORIGIN)
    }

    /// Sender address.
    pub fn sender(&self) -> Address {
        read_address(self.bytes, SENDER)
    }

    /// Destination domain.
    pub fn destination(&self) -> DomainId {
        read_u32(self.bytes, DESTINATION)
    }

    /// Recipient address.
    pub fn recipient(&self) -> Address {
        read_address(self.bytes, RECIPIENT)
    }

    /// Body bytes.
    pub fn body(&self) -> &'a [u8] {
        &self.bytes[HEADER_LEN..]
    }

    /// The full encoded form.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Copy into an owned message.
    pub fn to_message(&self) -> Message {
        Message {
            origin: self.origin(),
            sender: self.sender(),
            destination: self.destination(),
            recipient: self.recipient(),
            body: self.body().to_vec(),
        }
    }
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_be_bytes(buf)
}

fn read_address(bytes: &[u8], offset: usize) -> Address {
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&bytes[offset..offset + 32]);
    Address::new(buf)
}
