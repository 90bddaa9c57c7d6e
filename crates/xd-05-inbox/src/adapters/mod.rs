//! # Adapters

pub mod recipients;

pub use recipients::InMemoryRecipients;
