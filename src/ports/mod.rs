//! # Ports
//!
//! The lookup contract a documentation generator depends on.
//!
//! A miss is `None`, never an error: the generator skips linkification
//! for namespaces it has no documentation root for and keeps going.

use url::Url;

use crate::core::DocLink;

/// Resolve namespace prefixes to documentation base URLs
pub trait Resolve {
    /// Base URL for an exact, case-sensitive namespace match
    fn resolve(&self, namespace: &str) -> Option<&str>;

    /// Check if a namespace has a documentation root
    fn has_namespace(&self, namespace: &str) -> bool {
        self.resolve(namespace).is_some()
    }

    /// Resolve a dotted cross-reference identifier such as `Gtk.Widget`
    ///
    /// The namespace is everything before the first `.`; an identifier
    /// without a dot is looked up as-is.
    fn resolve_reference(&self, reference: &str) -> Option<&str> {
        let namespace = reference
            .split_once('.')
            .map_or(reference, |(namespace, _)| namespace);
        self.resolve(namespace)
    }

    /// Full link for a page under a namespace's documentation root
    ///
    /// `page` is relative, e.g. `class.Widget.html`. Pages that would
    /// leave the root (`/x`, `../x`, `//host/x`, absolute URLs) give `None`.
    fn link(&self, namespace: &str, page: &str) -> Option<Url> {
        let base = Url::parse(self.resolve(namespace)?).ok()?;
        let joined = base.join(page).ok()?;
        joined.as_str().starts_with(base.as_str()).then_some(joined)
    }
}

/// Linear scan; the first matching entry wins
impl Resolve for [DocLink] {
    fn resolve(&self, namespace: &str) -> Option<&str> {
        self.iter()
            .find(|entry| entry.namespace() == namespace)
            .map(DocLink::base_url)
    }
}
