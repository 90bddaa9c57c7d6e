//! # Shared Types Crate
//!
//! Primitive types, protocol-wide constants and the error taxonomy used by
//! every crate in the messaging workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: wire widths (`TREE_DEPTH`, `MAX_BODY_LEN`,
//!   `HEADER_LEN`) are defined once here.
//! - **One Taxonomy**: each crate keeps its own `thiserror` enum, and every
//!   one of them converts into [`ProtocolError`] so callers crossing crate
//!   boundaries can match on a single type.

pub mod constants;
pub mod domains;
pub mod entities;
pub mod errors;

pub use constants::*;
pub use domains::{domain_id_from_name, name_from_domain_id, DomainType, KnownDomain};
pub use entities::*;
pub use errors::*;
