//! # Outbound Ports
//!
//! Destination applications and the registry that resolves them.

use parking_lot::Mutex;
use shared_types::{Address, DomainId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A destination application.
pub trait MessageRecipient: Send {
    /// Handle a delivered message. An error aborts delivery; the inbox does
    /// not record the message and it may be retried.
    fn handle(&mut self, origin: DomainId, sender: Address, body: &[u8]) -> anyhow::Result<()>;
}

/// Resolves recipient addresses to applications.
pub trait RecipientRegistry: Send {
    /// Application registered at `address`.
    fn get_mut(&mut self, address: &Address) -> Option<&mut (dyn MessageRecipient + 'static)>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// One observed delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delivery {
    /// Origin domain
    pub origin: DomainId,
    /// Sender
    pub sender: Address,
    /// Body
    pub body: Vec<u8>,
}

/// Recording recipient. Clones share state, so a test keeps one clone and
/// registers another.
#[derive(Clone, Debug, Default)]
pub struct MockRecipient {
    /// Deliveries in order.
    pub deliveries: Arc<Mutex<Vec<Delivery>>>,
    /// Should `handle` fail?
    pub should_fail: Arc<AtomicBool>,
}

impl MockRecipient {
    /// New recipient that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle failure mode.
    pub fn set_failing(&self, failing: bool) {
        self.should_fail.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of deliveries so far.
    pub fn delivered(&self) -> Vec<Delivery> {
        self.deliveries.lock().clone()
    }
}

impl MessageRecipient for MockRecipient {
    fn handle(&mut self, origin: DomainId, sender: Address, body: &[u8]) -> anyhow::Result<()> {
        if self.should_fail.load(Ordering::SeqCst) {
            anyhow::bail!("mock recipient rejected message from domain {origin}");
        }
        self.deliveries.lock().push(Delivery {
            origin,
            sender,
            body: body.to_vec(),
        });
        Ok(())
    }
}
