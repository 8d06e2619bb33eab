//! # Engine
//!
//! The table consumers actually hold.
//!
//! This is where:
//! - The built-in catalog becomes the process-wide table
//! - Caller-supplied entries are validated into a table
//! - The Resolve port is implemented with a hash index

mod table;

pub use table::DocLinkTable;
