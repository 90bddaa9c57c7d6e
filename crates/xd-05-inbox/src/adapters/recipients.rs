//! # In-Memory Recipient Registry

use crate::ports::{MessageRecipient, RecipientRegistry};
use shared_types::Address;
use std::collections::HashMap;
use tracing::debug;

/// Registry backed by a map.
#[derive(Default)]
pub struct InMemoryRecipients {
    recipients: HashMap<Address, Box<dyn MessageRecipient>>,
}

impl InMemoryRecipients {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `recipient` at `address`, replacing any previous one.
    pub fn register(&mut self, address: Address, recipient: impl MessageRecipient + 'static) {
        debug!("[xd-05] Registered recipient {}", address);
        self.recipients.insert(address, Box::new(recipient));
    }

    /// Builder-style [`InMemoryRecipients::register`].
    pub fn with(mut self, address: Address, recipient: impl MessageRecipient + 'static) -> Self {
        self.register(address, recipient);
        self
    }

    /// Number of registered recipients.
    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }
}

impl RecipientRegistry for InMemoryRecipients {
    fn get_mut(&mut self, address: &Address) -> Option<&mut (dyn MessageRecipient + 'static)> {
        self.recipients.get_mut(address).map(|recipient| &mut **recipient)
    }
}
