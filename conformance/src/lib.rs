//! Lexicon conformance suite.
//!
//! Structural checks over a loaded dictionary, beyond what loading already
//! enforces. Loading guarantees well-formed YAML and required fields;
//! conformance covers the rules that make a dictionary usable as a shared
//! vocabulary:
//!
//! | Validator | Rule |
//! |-----------|------|
//! | `descriptors` | non-empty id/name/type/description; unique ids; entity-namespaced property ids |
//! | `ranges` | `minimum_value <= maximum_value` for every complete bound pair |
//! | `references` | property `type` resolves to a declared data type |
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//!
//! let dictionary =
//!     lexicon_dictionary::Dictionary::load(Path::new("dictionaries/common/dictionary.yaml"))?;
//! let report = lexicon_conformance::run_all(&dictionary);
//! assert!(report.all_passed());
//! # Ok::<(), lexicon_dictionary::DictionaryError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

pub use report::{CheckResult, Report, Severity};

use lexicon_dictionary::Dictionary;

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators run in this order:
/// 1. Descriptor completeness and id uniqueness
/// 2. Attribute range consistency
/// 3. Property type references
#[must_use]
pub fn run_all(dictionary: &Dictionary) -> Report {
    let mut report = Report::new();
    report.extend(validators::descriptors::validate(dictionary));
    report.extend(validators::ranges::validate(dictionary));
    report.extend(validators::references::validate(dictionary));
    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use lexicon_dictionary::Dictionary;

    /// A small conformant dictionary for validator tests.
    pub(crate) fn sample_dictionary() -> Dictionary {
        serde_yaml::from_str(
            r"
            id: test.dictionary
            name: Test dictionary
            description: In-memory fixture for validator tests.
            version: 0.0.1
            data_types:
              - id: int32
                name: 32-bit integer
                description: Signed 32-bit integer.
              - id: elementid
                name: Element id
                description: Atomic number of a chemical element.
            entities:
              - id: atom
                name: Atom
                description: A chemical atom.
                properties:
                  - id: atom.formal_charge
                    name: Formal charge
                    type: int32
                    description: Formal charge assigned to the atom.
                    attributes:
                      minimum_value: -100
                      maximum_value: 100
                  - id: atom.element
                    name: Element
                    type: elementid
                    description: Chemical element of the atom.
            enumerations:
              - id: hybridization
                name: Hybridization
                description: Orbital hybridization classes.
                values:
                  - id: sp3
                    integral_value: 3
            ",
        )
        .unwrap()
    }
}
