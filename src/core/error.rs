//! # Entry Errors
//!
//! Failures raised while building a link table from entries.
//!
//! Lookups never produce these: an unknown namespace is a plain `None`.

use thiserror::Error;

/// Result type for table construction
pub type DocLinkResult<T> = Result<T, DocLinkError>;

/// A broken table invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocLinkError {
    #[error("namespace prefix must not be empty")]
    EmptyNamespace,

    #[error("namespace prefix {0:?} contains '.' or whitespace")]
    InvalidNamespace(String),

    #[error("duplicate namespace prefix: {0}")]
    DuplicateNamespace(String),

    #[error("base URL for {namespace} is not a valid absolute URL: {reason}")]
    InvalidUrl { namespace: String, reason: String },

    #[error("base URL for {namespace} cannot be used as a base")]
    NotABase { namespace: String },

    #[error("base URL for {namespace} must end with '/'")]
    MissingTrailingSlash { namespace: String },
}
