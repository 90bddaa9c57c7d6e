//! # XD-04 Outbox
//!
//! Per-origin-domain dispatch entrypoint. Wraps the Merkle accumulator with
//! a one-way state machine and the body size limit.
//!
//! **Subsystem ID:** 04  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## State Machine
//!
//! ```text
//! (uninitialized) --initialize(manager)--> Active --fail(manager)--> Failed
//! ```
//!
//! `Failed` is terminal. Only the bound validator manager may trigger it.
//!
//! ## Dispatch
//!
//! | Check | Error |
//! |-------|-------|
//! | initialized and Active | `InvalidState` |
//! | `body.len() <= MAX_BODY_LEN` | `MessageTooLarge` |
//! | accumulator not full | `TreeFull` |
//!
//! All checks run before any mutation; the `Dispatch` event is recorded in
//! the same step as the append.
//!
//! ## Module Structure
//!
//! ```text
//! xd-04-outbox/
//! ├── domain/          # OutboxStatus, OutboxEvent, errors
//! ├── ports/           # OutboxApi (inbound)
//! ├── application/     # Outbox service
//! ├── adapters/        # HaltableOutbox for the validator manager
//! └── config.rs        # OutboxConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use application::Outbox;
pub use config::OutboxConfig;
pub use domain::{OutboxError, OutboxEvent, OutboxStatus};
pub use ports::OutboxApi;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
