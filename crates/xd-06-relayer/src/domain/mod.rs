//! # Domain Module

pub mod errors;
pub mod packets;

pub use errors::*;
pub use packets::*;
