//! # Inbox Events

use serde::{Deserialize, Serialize};
use shared_types::Hash;

/// Events recorded by the inbox, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InboxEvent {
    /// A new checkpoint was accepted.
    CheckpointCached {
        /// Attested root
        root: Hash,
        /// Attested index
        index: u64,
    },
    /// A message was delivered.
    Processed {
        /// Delivered leaf
        leaf_index: u64,
    },
}
