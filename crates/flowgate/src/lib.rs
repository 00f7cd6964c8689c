//! Top-level facade crate for flowgate.
//!
//! Re-exports the core policy model so users can depend on a single crate.

pub mod core {
    pub use flowgate_core::*;
}
