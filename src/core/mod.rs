//! # Core
//!
//! Pure data, no I/O:
//! - `DocLink`: one namespace prefix and its documentation root
//! - `DocLinkError`: the invariants an entry or table can break
//! - `BUILTIN`: the catalog the global table is built from

use std::borrow::Cow;

use url::Url;

mod catalog;
mod error;

pub use catalog::BUILTIN;
pub use error::{DocLinkError, DocLinkResult};

/// A namespace prefix and the base URL of its API documentation
///
/// The base URL keeps its trailing slash so page paths can be appended
/// to it directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocLink {
    #[cfg_attr(feature = "serde", serde(rename = "namespacePrefix"))]
    namespace: Cow<'static, str>,

    #[cfg_attr(feature = "serde", serde(rename = "baseURL"))]
    base_url: Cow<'static, str>,
}

impl DocLink {
    /// Create an entry from owned or borrowed strings
    pub fn new(
        namespace: impl Into<Cow<'static, str>>,
        base_url: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            base_url: base_url.into(),
        }
    }

    /// Create an entry from static strings (usable in constants)
    pub const fn borrowed(namespace: &'static str, base_url: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(namespace),
            base_url: Cow::Borrowed(base_url),
        }
    }

    /// The namespace prefix, e.g. `Gtk`
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The documentation root, e.g. `https://docs.gtk.org/gtk4/`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check the per-entry invariants
    ///
    /// Uniqueness is a table property and is checked by
    /// [`DocLinkTable::from_entries`](crate::DocLinkTable::from_entries).
    pub fn validate(&self) -> DocLinkResult<()> {
        if self.namespace.is_empty() {
            return Err(DocLinkError::EmptyNamespace);
        }

        // Dotted namespaces are unreachable through resolve_reference
        if self
            .namespace
            .chars()
            .any(|c| c == '.' || c.is_whitespace())
        {
            return Err(DocLinkError::InvalidNamespace(self.namespace.to_string()));
        }

        let parsed = Url::parse(&self.base_url).map_err(|e| DocLinkError::InvalidUrl {
            namespace: self.namespace.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.cannot_be_a_base() {
            return Err(DocLinkError::NotABase {
                namespace: self.namespace.to_string(),
            });
        }

        // Checked on the raw string: Url normalizes "https://host" to "https://host/"
        if !self.base_url.ends_with('/') {
            return Err(DocLinkError::MissingTrailingSlash {
                namespace: self.namespace.to_string(),
            });
        }

        Ok(())
    }
}

impl From<(&'static str, &'static str)> for DocLink {
    fn from((namespace, base_url): (&'static str, &'static str)) -> Self {
        Self::borrowed(namespace, base_url)
    }
}
