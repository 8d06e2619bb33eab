//! # Link Table
//!
//! The validated, immutable namespace -> documentation root table.
//!
//! Entries keep declaration order for iteration and rendering; lookups go
//! through a hash index keyed by namespace.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::core::{DocLink, DocLinkError, DocLinkResult, BUILTIN};
use crate::ports::Resolve;

static GLOBAL: LazyLock<DocLinkTable> = LazyLock::new(|| {
    let table = DocLinkTable::from_trusted(BUILTIN.to_vec());
    debug_assert!(table.validate().is_ok(), "built-in catalog is invalid");
    debug!(entries = table.len(), "built documentation link table");
    table
});

/// Immutable documentation link table
#[derive(Debug, Clone)]
pub struct DocLinkTable {
    /// Entries in declaration order
    entries: Vec<DocLink>,

    /// Namespace -> position in `entries`
    index: HashMap<String, usize>,
}

impl DocLinkTable {
    /// The process-wide table of built-in entries
    ///
    /// Built on first use and never mutated afterwards.
    pub fn global() -> &'static DocLinkTable {
        &GLOBAL
    }

    /// Build a table, enforcing every entry and table invariant
    pub fn from_entries<I, E>(entries: I) -> DocLinkResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<DocLink>,
    {
        let entries: Vec<DocLink> = entries.into_iter().map(Into::into).collect();
        let table = Self::from_trusted(entries);
        table.validate()?;
        Ok(table)
    }

    /// Build without validation; on duplicates the first entry wins
    fn from_trusted(entries: Vec<DocLink>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            index.entry(entry.namespace().to_owned()).or_insert(position);
        }

        Self { entries, index }
    }

    fn validate(&self) -> DocLinkResult<()> {
        for entry in &self.entries {
            entry.validate()?;
        }

        // Each namespace indexes exactly one entry unless one repeats
        if self.index.len() != self.entries.len() {
            let mut seen = HashSet::with_capacity(self.entries.len());
            for entry in &self.entries {
                if !seen.insert(entry.namespace()) {
                    return Err(DocLinkError::DuplicateNamespace(entry.namespace().to_string()));
                }
            }
        }

        Ok(())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &DocLink> + '_ {
        self.entries.iter()
    }

    /// Namespace prefixes in declaration order
    pub fn namespaces(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(DocLink::namespace)
    }

    /// Entries as a slice, in declaration order
    pub fn entries(&self) -> &[DocLink] {
        &self.entries
    }
}

impl Resolve for DocLinkTable {
    fn resolve(&self, namespace: &str) -> Option<&str> {
        match self.index.get(namespace) {
            Some(&position) => Some(self.entries[position].base_url()),
            None => {
                trace!(namespace, "no documentation root for namespace");
                None
            }
        }
    }
}

impl<'a> IntoIterator for &'a DocLinkTable {
    type Item = &'a DocLink;
    type IntoIter = std::slice::Iter<'a, DocLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_resolves_every_entry() {
        let table = DocLinkTable::global();

        let expected = [
            ("GLib", "https://docs.gtk.org/glib/"),
            ("GObject", "https://docs.gtk.org/gobject/"),
            ("Gio", "https://docs.gtk.org/gio/"),
            ("Gtk", "https://docs.gtk.org/gtk4/"),
            ("Adw", "https://gnome.pages.gitlab.gnome.org/libadwaita/doc/"),
        ];

        assert_eq!(table.len(), 5);
        for (namespace, url) in expected {
            assert_eq!(table.resolve(namespace), Some(url));
        }
    }

    #[test]
    fn test_global_unknown_and_empty() {
        let table = DocLinkTable::global();
        assert_eq!(table.resolve("NotAKnownPrefix"), None);
        assert_eq!(table.resolve(""), None);
    }

    #[test]
    fn test_global_case_sensitive() {
        let table = DocLinkTable::global();
        assert_eq!(table.resolve("glib"), None);
        assert_eq!(table.resolve("GLib"), Some("https://docs.gtk.org/glib/"));
        assert_eq!(table.resolve("GTK"), None);
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(DocLinkTable::global(), DocLinkTable::global()));
    }

    #[test]
    fn test_global_readable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    DocLinkTable::global()
                        .resolve("Gtk")
                        .map(str::to_owned)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(
                handle.join().unwrap().as_deref(),
                Some("https://docs.gtk.org/gtk4/")
            );
        }
    }

    #[test]
    fn test_iteration_keeps_declaration_order() {
        let names: Vec<_> = DocLinkTable::global().namespaces().collect();
        assert_eq!(names, ["GLib", "GObject", "Gio", "Gtk", "Adw"]);
    }

    #[test]
    fn test_from_entries_builtin() {
        let table = DocLinkTable::from_entries(BUILTIN).unwrap();
        assert_eq!(table.entries(), &BUILTIN[..]);
    }

    #[test]
    fn test_from_entries_tuples() {
        let table = DocLinkTable::from_entries([
            ("Slate", "https://example.org/slate/"),
            ("Hcl", "https://example.org/ghcl/"),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("Hcl"), Some("https://example.org/ghcl/"));
    }

    #[test]
    fn test_from_entries_owned() {
        let namespace = String::from("Slate");
        let table =
            DocLinkTable::from_entries([DocLink::new(namespace, "https://example.org/slate/")])
                .unwrap();
        assert!(table.has_namespace("Slate"));
    }

    #[test]
    fn test_from_entries_empty_table() {
        let table = DocLinkTable::from_entries(Vec::<DocLink>::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.resolve("GLib"), None);
    }

    #[test]
    fn test_from_entries_rejects_duplicate() {
        let result = DocLinkTable::from_entries([
            ("Gtk", "https://docs.gtk.org/gtk4/"),
            ("Gio", "https://docs.gtk.org/gio/"),
            ("Gtk", "https://docs.gtk.org/gtk3/"),
        ]);

        assert_eq!(
            result.unwrap_err(),
            DocLinkError::DuplicateNamespace("Gtk".to_string())
        );
    }

    #[test]
    fn test_from_entries_rejects_invalid_entry() {
        let result = DocLinkTable::from_entries([
            ("GLib", "https://docs.gtk.org/glib/"),
            ("", "https://docs.gtk.org/gio/"),
        ]);
        assert_eq!(result.unwrap_err(), DocLinkError::EmptyNamespace);

        let result = DocLinkTable::from_entries([("Gtk.Extra", "https://docs.gtk.org/gtk4/")]);
        assert_eq!(
            result.unwrap_err(),
            DocLinkError::InvalidNamespace("Gtk.Extra".to_string())
        );

        let result = DocLinkTable::from_entries([("Gtk", "https://docs.gtk.org/gtk4")]);
        assert!(matches!(
            result,
            Err(DocLinkError::MissingTrailingSlash { .. })
        ));
    }

    #[test]
    fn test_reference_and_link_through_table() {
        let table = DocLinkTable::global();
        assert_eq!(
            table.resolve_reference("Gio.File"),
            Some("https://docs.gtk.org/gio/")
        );
        assert_eq!(
            table.link("GLib", "struct.HashTable.html").map(String::from).as_deref(),
            Some("https://docs.gtk.org/glib/struct.HashTable.html")
        );
    }

    #[test]
    fn test_into_iterator() {
        let mut count = 0;
        for entry in DocLinkTable::global() {
            assert!(entry.base_url().ends_with('/'));
            count += 1;
        }
        assert_eq!(count, 5);
    }
}
