//! # Adapters
//!
//! Ways out of the crate for the link table:
//! - `urlmap`: the `urlmap.js` file gi-docgen reads
//! - Python bindings (when enabled), for generators written in Python

pub mod urlmap;

#[cfg(feature = "python")]
pub mod python;
