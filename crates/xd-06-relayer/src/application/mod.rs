//! # Application Layer
//!
//! - `relayer`: origin side, outbox events to signed packets
//! - `deliver`: destination side, packets into the inbox

pub mod deliver;
pub mod relayer;

pub use deliver::{apply_packet, deliver, redeliver};
pub use relayer::Relayer;
