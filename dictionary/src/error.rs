//! Dictionary error taxonomy.
//!
//! Two families of failure are kept distinct so callers can tell a broken
//! file apart from a well-formed file with bad content:
//!
//! - [`DictionaryError::Io`] / [`DictionaryError::Parse`] — the tree could
//!   not be read into the model at all (missing file, malformed YAML, a
//!   required field absent);
//! - [`DictionaryError::Validation`] — the tree parsed, but violates an
//!   invariant the loader enforces (duplicate enumeration values, an
//!   unparseable dictionary version).

use std::path::PathBuf;

/// Error raised while loading a dictionary tree.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// A dictionary file could not be read.
    #[error("failed to read {path}")]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// A dictionary file was read but could not be parsed into the model.
    ///
    /// Covers both malformed YAML and missing required fields (`id`, `name`,
    /// `type`, `integral_value`, ...).
    #[error("failed to parse {path}")]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The dictionary parsed but violates a load-time invariant.
    #[error("{0}")]
    Validation(String),
}
