//! # Python Bindings
//!
//! PyO3 bindings so a Python documentation generator can resolve
//! namespaces against the built-in table.
//!
//! ## Python API
//!
//! ```python
//! import slate_doclinks
//!
//! slate_doclinks.resolve("Gtk")                    # 'https://docs.gtk.org/gtk4/'
//! slate_doclinks.resolve("NotAKnownPrefix")        # None
//! slate_doclinks.resolve_reference("Gio.File")     # 'https://docs.gtk.org/gio/'
//! slate_doclinks.link("Gtk", "class.Widget.html")  # 'https://docs.gtk.org/gtk4/class.Widget.html'
//!
//! for namespace, base_url in slate_doclinks.entries():
//!     print(namespace, base_url)
//!
//! open("urlmap.js", "w").write(slate_doclinks.urlmap())
//! ```

use pyo3::prelude::*;

use crate::adapters::urlmap::render_urlmap;
use crate::engine::DocLinkTable;
use crate::ports::Resolve;

/// Base URL for a namespace, or None
#[pyfunction]
fn resolve(namespace: &str) -> Option<String> {
    DocLinkTable::global().resolve(namespace).map(str::to_owned)
}

/// Base URL for a dotted identifier such as "Gtk.Widget", or None
#[pyfunction]
fn resolve_reference(reference: &str) -> Option<String> {
    DocLinkTable::global()
        .resolve_reference(reference)
        .map(str::to_owned)
}

/// Full link for a page under a namespace, or None
#[pyfunction]
fn link(namespace: &str, page: &str) -> Option<String> {
    DocLinkTable::global().link(namespace, page).map(String::from)
}

/// All (namespace, base_url) pairs in declaration order
#[pyfunction]
fn entries() -> Vec<(String, String)> {
    DocLinkTable::global()
        .iter()
        .map(|entry| (entry.namespace().to_owned(), entry.base_url().to_owned()))
        .collect()
}

/// The table rendered as urlmap.js source
#[pyfunction]
fn urlmap() -> String {
    render_urlmap(DocLinkTable::global())
}

/// slate-doclinks Python module
#[pymodule]
fn slate_doclinks(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(resolve, m)?)?;
    m.add_function(wrap_pyfunction!(resolve_reference, m)?)?;
    m.add_function(wrap_pyfunction!(link, m)?)?;
    m.add_function(wrap_pyfunction!(entries, m)?)?;
    m.add_function(wrap_pyfunction!(urlmap, m)?)?;

    m.add("__doc__", "Slate external documentation link table")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
