//! # Domain Module
//!
//! Validator sets, checkpoints and fraud verdicts.

pub mod checkpoint;
pub mod errors;
pub mod invariants;
pub mod validator_set;

pub use checkpoint::*;
pub use errors::*;
pub use invariants::*;
pub use validator_set::*;
