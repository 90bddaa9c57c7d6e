//! Relayer configuration.

use serde::{Deserialize, Serialize};
use shared_types::{domain_id_from_name, DomainId, KnownDomain};
use std::env;

/// Relayer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayerConfig {
    /// Domain whose outbox is watched
    pub origin_domain: DomainId,

    /// Domain whose inbox receives packets
    pub destination_domain: DomainId,

    /// Packets buffered in the relay channel
    pub channel_capacity: usize,

    /// New messages required before the relayer requests a checkpoint
    pub checkpoint_interval: u64,
}

impl Default for RelayerConfig {
    fn default() -> Self {
        Self {
            origin_domain: KnownDomain::Test1.id(),
            destination_domain: KnownDomain::Test2.id(),
            channel_capacity: 256,
            checkpoint_interval: 1,
        }
    }
}

impl RelayerConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `XD_ORIGIN_DOMAIN`: Origin domain id or name (default: test1)
    /// - `XD_DESTINATION_DOMAIN`: Destination domain id or name (default: test2)
    /// - `XD_CHANNEL_CAPACITY`: Relay channel capacity (default: 256)
    /// - `XD_CHECKPOINT_INTERVAL`: Messages per checkpoint (default: 1)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            origin_domain: env_domain("XD_ORIGIN_DOMAIN").unwrap_or(defaults.origin_domain),
            destination_domain: env_domain("XD_DESTINATION_DOMAIN")
                .unwrap_or(defaults.destination_domain),
            channel_capacity: parse_env("XD_CHANNEL_CAPACITY")
                .unwrap_or(defaults.channel_capacity),
            checkpoint_interval: parse_env("XD_CHECKPOINT_INTERVAL")
                .unwrap_or(defaults.checkpoint_interval),
        }
        .normalized()
    }

    /// Relayer from `origin` to `destination` with default tuning.
    pub fn new(origin_domain: DomainId, destination_domain: DomainId) -> Self {
        Self {
            origin_domain,
            destination_domain,
            ..Self::default()
        }
    }

    /// Create config for testing (1000 -> 2000, small channel).
    pub fn for_testing() -> Self {
        Self {
            origin_domain: 1000,
            destination_domain: 2000,
            channel_capacity: 16,
            checkpoint_interval: 1,
        }
    }

    /// Zero capacity or interval become 1.
    pub fn normalized(mut self) -> Self {
        self.channel_capacity = self.channel_capacity.max(1);
        self.checkpoint_interval = self.checkpoint_interval.max(1);
        self
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn env_domain(key: &str) -> Option<DomainId> {
    env::var(key).ok().and_then(|v| parse_domain(&v))
}

/// Domain id from a number or a registry name such as `celo`.
pub fn parse_domain(value: &str) -> Option<DomainId> {
    let value = value.trim();
    value.parse().ok().or_else(|| domain_id_from_name(value))
}
