//! # Domain Module
//!
//! The message entity and codec errors.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
