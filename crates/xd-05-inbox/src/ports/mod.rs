//! # Ports Module
//!
//! - **Inbound**: [`InboxApi`], what relayers call
//! - **Outbound**: [`RecipientRegistry`] and [`MessageRecipient`], the
//!   destination applications

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
