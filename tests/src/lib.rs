//! # Cross-Domain Messaging Test Suite
//!
//! Unified test crate exercising the subsystems together.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Origin/destination pair wired to one validator set
//! └── integration/
//!     ├── flows.rs      # Dispatch -> checkpoint -> process, rotation, halts
//!     ├── attacks.rs    # Forged proofs, forged quorums, replays, fraud
//!     └── relay.rs      # Relayer agent over the async channel
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p xd-tests
//!
//! # By category
//! cargo test -p xd-tests integration::flows
//! cargo test -p xd-tests integration::attacks
//!
//! # Benchmarks
//! cargo bench -p xd-tests
//! ```

#![allow(dead_code)]

pub mod fixtures;
