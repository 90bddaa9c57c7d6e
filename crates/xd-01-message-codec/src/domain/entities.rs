//! # Message Entity

use serde::{Deserialize, Serialize};
use shared_types::{Address, DomainId};
use std::fmt;

/// A cross-domain message. Immutable once dispatched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Domain the message was dispatched on.
    pub origin: DomainId,
    /// Application that dispatched it.
    pub sender: Address,
    /// Domain the message is addressed to.
    pub destination: DomainId,
    /// Application that receives it.
    pub recipient: Address,
    /// Opaque payload.
    pub body: Vec<u8>,
}

impl Message {
    /// Create a new message.
    pub fn new(
        origin: DomainId,
        sender: Address,
        destination: DomainId,
        recipient: Address,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            origin,
            sender,
            destination,
            recipient,
            body: body.into(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Message {{ {}:{} -> {}:{}, body: {} bytes }}",
            self.origin,
            self.sender,
            self.destination,
            self.recipient,
            self.body.len()
        )
    }
}
