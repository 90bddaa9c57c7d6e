//! # XD-05 Inbox
//!
//! Destination side of one `(origin, destination)` domain pair: caches
//! validator-attested checkpoints and delivers proven messages exactly once.
//!
//! **Subsystem ID:** 05  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Process Pipeline
//!
//! | Step | Rejection |
//! |------|-----------|
//! | 1. A checkpoint is cached | `NoCheckpoint` |
//! | 2. `leaf_index <= checkpoint.index` | `IndexTooHigh` |
//! | 3. Message decodes | `MalformedMessage` |
//! | 4. Origin and destination match the inbox | `DomainMismatch` |
//! | 5. Index not yet delivered | `AlreadyProcessed` |
//! | 6. Proof reconstructs the checkpoint root | `InvalidProof` |
//! | 7. Recipient handler succeeds | `HandlerFailure` |
//!
//! The index is recorded only after the handler succeeds. A failing handler
//! leaves the inbox untouched, so the message can be retried.
//!
//! ## Module Structure
//!
//! ```text
//! xd-05-inbox/
//! ├── domain/          # InboxEvent, errors, invariants
//! ├── ports/           # InboxApi (inbound), MessageRecipient + RecipientRegistry (outbound)
//! ├── application/     # Inbox service
//! ├── adapters/        # InMemoryRecipients
//! └── config.rs        # InboxConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::InMemoryRecipients;
pub use application::Inbox;
pub use config::InboxConfig;
pub use domain::{invariant_checkpoint_advances, InboxError, InboxEvent};
pub use ports::{Delivery, InboxApi, MessageRecipient, MockRecipient, RecipientRegistry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
