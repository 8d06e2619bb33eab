//! # slate-doclinks
//!
//! > Where Slate's docs point when they mention GLib, Gtk or Adw
//!
//! The table of external API documentation roots used when Slate's
//! reference documentation is generated. A cross-reference such as
//! `Gtk.Widget` is linked by looking up its namespace prefix (`Gtk`) and
//! appending the page path to the base URL found here.
//!
//! ## Philosophy
//!
//! - **Data, not machinery** - Five fixed entries, built once, never mutated
//! - **Absence is normal** - Unknown namespaces resolve to `None`, not an error
//! - **Exact match** - Case-sensitive, no prefix guessing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      slate-doclinks                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  CORE (pure data, no I/O)                                   │
//! │    DocLink, DocLinkError, BUILTIN                           │
//! │                                                             │
//! │  PORTS (trait contracts)                                    │
//! │    Resolve                                                  │
//! │                                                             │
//! │  ADAPTERS (ways out)                                        │
//! │    urlmap.js rendering                                      │
//! │    API: Python bindings                                     │
//! │                                                             │
//! │  ENGINE (the table)                                         │
//! │    DocLinkTable - validated, process-wide                   │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use slate_doclinks::{DocLinkTable, Resolve};
//!
//! let table = DocLinkTable::global();
//!
//! assert_eq!(table.resolve("Gtk"), Some("https://docs.gtk.org/gtk4/"));
//! assert_eq!(table.resolve("glib"), None);
//!
//! let url = table.link("Gtk", "class.Widget.html").unwrap();
//! assert_eq!(url.as_str(), "https://docs.gtk.org/gtk4/class.Widget.html");
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure data, no I/O
/// Contains: DocLink, DocLinkError, BUILTIN catalog
pub mod core;

/// Port definitions - trait contracts for consumers
/// Contains: Resolve trait
pub mod ports;

/// Adapter implementations - ways out of the crate
/// Contains: urlmap, python submodules
pub mod adapters;

/// Engine - the table itself
/// Contains: DocLinkTable
pub mod engine;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{DocLink, DocLinkError, DocLinkResult, BUILTIN};

// Port traits
pub use crate::ports::Resolve;

// Adapters
pub use crate::adapters::urlmap::{render_urlmap, write_urlmap, UrlMap};

// Engine
pub use crate::engine::DocLinkTable;

/// Resolve a namespace against the process-wide table
///
/// Shorthand for `DocLinkTable::global().resolve(namespace)`.
pub fn resolve(namespace: &str) -> Option<&'static str> {
    DocLinkTable::global().resolve(namespace)
}
