//! # XD-06 Relayer
//!
//! Off-chain agent carrying messages from an origin outbox to a destination
//! inbox over an untrusted store-and-forward channel.
//!
//! **Subsystem ID:** 06  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Pipeline
//!
//! ```text
//! Outbox events ──► MerkleTreeBuilder ──► Prover (proofs)
//!        │                   │
//!        │           IncrementalMerkle (root cross-check)
//!        ▼
//! Checkpoint ──► CheckpointSigner × n ──► SignatureCollector ──► RelayChannel
//!                                                                     │
//!                                             deliver() ──► Inbox ◄───┘
//! ```
//!
//! The channel is untrusted: the inbox re-verifies every checkpoint and
//! every proof, so a lost, duplicated or forged packet is rejected there.
//!
//! ## Module Structure
//!
//! ```text
//! xd-06-relayer/
//! ├── domain/          # RelayPacket, reports, errors
//! ├── algorithms/      # Prover, MerkleTreeBuilder, SignatureCollector
//! ├── adapters/        # RelayChannel (tokio mpsc), CheckpointSigner
//! ├── application/     # Relayer agent, destination deliver loop
//! ├── config.rs        # RelayerConfig
//! └── main.rs          # xd-relayer binary: stdin lines in, deliveries logged
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;

// Re-exports
pub use adapters::{relay_channel, CheckpointSigner, RelayReceiver, RelaySender};
pub use algorithms::{MerkleTreeBuilder, Prover, SignatureCollector};
pub use application::{apply_packet, deliver, redeliver, Relayer};
pub use config::{parse_domain, RelayerConfig};
pub use domain::{DeliveryReport, ProverError, RelayPacket, RelayReport, RelayerError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
