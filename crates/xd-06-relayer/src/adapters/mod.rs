//! # Adapters Module
//!
//! - `channel`: store-and-forward transport on tokio mpsc
//! - `signer`: validator agent signing checkpoints

pub mod channel;
pub mod signer;

pub use channel::{relay_channel, RelayReceiver, RelaySender};
pub use signer::CheckpointSigner;
