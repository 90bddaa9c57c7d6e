//! # Outbox Configuration

use serde::{Deserialize, Serialize};
use shared_types::{DomainId, MAX_BODY_LEN};

/// Outbox configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboxConfig {
    /// Origin domain this outbox lives on.
    pub domain: DomainId,

    /// Largest accepted body. Clamped to `MAX_BODY_LEN`, which every inbox
    /// enforces when decoding.
    pub max_body_len: usize,
}

impl Default for OutboxConfig {
    fn default() -> Self {
        Self {
            domain: 0,
            max_body_len: MAX_BODY_LEN,
        }
    }
}

impl OutboxConfig {
    /// Config for `domain` with protocol defaults.
    pub fn for_domain(domain: DomainId) -> Self {
        Self {
            domain,
            ..Default::default()
        }
    }

    /// Create a config for testing.
    pub fn for_testing() -> Self {
        Self::for_domain(1000)
    }

    /// Effective body limit.
    pub fn body_limit(&self) -> usize {
        self.max_body_len.min(MAX_BODY_LEN)
    }
}
