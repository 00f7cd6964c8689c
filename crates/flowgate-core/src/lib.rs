//! flowgate core: transport policy data model, wire codec, and error types.
//!
//! This crate defines the rule-set contract shared by control-plane tooling
//! and whatever distributes or enforces the policies. It intentionally
//! carries no transport or runtime dependencies so it can be reused in
//! multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PolicyError`/`Result` so consumers
//! never crash on malformed policy payloads.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;
pub mod wire;

/// Shared result type.
pub use error::{PolicyError, Result};
