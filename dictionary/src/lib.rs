//! Property dictionaries as typed Rust data.
//!
//! A dictionary is a common vocabulary for bridging dialects: it names a set
//! of data types, a set of base entities (atom, bond, ...), the properties
//! each entity can carry, and the enumerations those properties draw values
//! from. On disk a dictionary is a small tree of YAML files rooted at a
//! `dictionary.yaml` header; this crate loads that tree into owned structs
//! and enforces the load-time invariants (required fields, version format,
//! enumeration uniqueness).
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//!
//! let dictionary =
//!     lexicon_dictionary::Dictionary::load(Path::new("dictionaries/common/dictionary.yaml"))?;
//! assert!(!dictionary.entities.is_empty());
//! # Ok::<(), lexicon_dictionary::DictionaryError>(())
//! ```
//!
//! Structural conformance checks beyond what loading enforces (non-empty
//! descriptions, attribute range consistency, type resolution) live in the
//! `lexicon-conformance` crate.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod load;
pub mod model;

pub use error::DictionaryError;
pub use model::{
    Attributes, DataType, Dictionary, Entity, Enumeration, EnumerationValue, Property,
};
