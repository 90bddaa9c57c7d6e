//! # Adapters

pub mod halt;
