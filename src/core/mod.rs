//! Core types shared across the crate.
//!
//! Currently this is just the crate-level error taxonomy; commands otherwise
//! work with `anyhow::Result` and attach context at the call site.

pub mod error;

pub use error::Error;
