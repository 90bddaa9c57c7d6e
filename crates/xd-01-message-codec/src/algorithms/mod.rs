//! # Algorithms
//!
//! Pure encoding functions. No I/O, no state.

pub mod codec;
pub mod view;

pub use codec::{decode, encode, hash_encoded_leaf, hash_leaf, message_id};
pub use view::MessageView;
