//! # Ports Module
//!
//! - **Inbound**: [`CheckpointVerifier`], what inboxes call
//! - **Outbound**: [`HaltableOutbox`], what the manager calls to halt a domain

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
