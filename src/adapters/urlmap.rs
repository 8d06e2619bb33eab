//! # urlmap.js Rendering
//!
//! gi-docgen reads external documentation roots from a `urlmap.js` file
//! placed next to the generated docs:
//!
//! ```text
//! // URL map for external documentation links
//! baseURLs = [
//!   [ 'GLib', 'https://docs.gtk.org/glib/' ],
//!   [ 'Gtk', 'https://docs.gtk.org/gtk4/' ],
//! ]
//! ```
//!
//! One row per entry, in declaration order.

use std::fmt;
use std::io;

use crate::engine::DocLinkTable;

const HEADER: &str = "// URL map for external documentation links";

/// Display adapter that formats a table as `urlmap.js`
pub struct UrlMap<'a>(pub &'a DocLinkTable);

impl fmt::Display for UrlMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        writeln!(f, "baseURLs = [")?;
        for entry in self.0 {
            writeln!(
                f,
                "  [ '{}', '{}' ],",
                JsStr(entry.namespace()),
                JsStr(entry.base_url())
            )?;
        }
        writeln!(f, "]")
    }
}

/// Single-quoted JavaScript string contents
struct JsStr<'a>(&'a str);

impl fmt::Display for JsStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '\'' => f.write_str("\\'")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                c => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

/// Render a table as `urlmap.js` source
pub fn render_urlmap(table: &DocLinkTable) -> String {
    UrlMap(table).to_string()
}

/// Stream a table as `urlmap.js` source
pub fn write_urlmap<W: io::Write>(table: &DocLinkTable, mut out: W) -> io::Result<()> {
    write!(out, "{}", UrlMap(table))?;
    out.flush()
}
