//! # Inbox Configuration

use serde::{Deserialize, Serialize};
use shared_types::DomainId;

/// Inbox configuration: the domain pair it serves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxConfig {
    /// Domain messages come from.
    pub origin: DomainId,
    /// Domain this inbox lives on.
    pub destination: DomainId,
}

impl InboxConfig {
    /// Config for a domain pair.
    pub fn new(origin: DomainId, destination: DomainId) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Create a config for testing.
    pub fn for_testing() -> Self {
        Self::new(1000, 2000)
    }
}
