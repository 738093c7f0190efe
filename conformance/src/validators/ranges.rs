//! Attribute range consistency validator.
//!
//! Wherever a record's attributes carry both halves of a min/max pair, the
//! minimum must not exceed the maximum, and both bounds must be numeric.
//! Applies to property descriptors and to data types.

use lexicon_dictionary::{Attributes, Dictionary};

use crate::report::{CheckResult, Report};

const VALIDATOR: &str = "ranges";

/// Attribute key pairs that form a numeric range.
const BOUND_PAIRS: &[(&str, &str)] = &[
    ("minimum_value", "maximum_value"),
    ("minimum_value_inclusive", "maximum_value_inclusive"),
    ("minimum_value_exclusive", "maximum_value_exclusive"),
];

/// Validates min/max attribute pairs across the dictionary.
#[must_use]
pub fn validate(dictionary: &Dictionary) -> Report {
    let mut report = Report::new();
    let before = report.failure_count();
    let mut ranges_seen = 0usize;

    for data_type in &dictionary.data_types {
        ranges_seen += check_bounds(
            &mut report,
            &format!("data type {}", data_type.id),
            &data_type.attributes,
        );
    }
    for entity in &dictionary.entities {
        for property in &entity.properties {
            ranges_seen += check_bounds(
                &mut report,
                &format!("property {}", property.id),
                &property.attributes,
            );
        }
    }

    if report.failure_count() == before {
        report.push(CheckResult::pass(
            VALIDATOR,
            format!("All {ranges_seen} min/max attribute pairs consistent"),
        ));
    }
    report
}

/// Checks every complete bound pair in one attribute map; returns the
/// number of complete pairs examined.
fn check_bounds(report: &mut Report, context: &str, attributes: &Attributes) -> usize {
    let mut seen = 0;
    for (min_key, max_key) in BOUND_PAIRS {
        let (Some(min), Some(max)) = (attributes.get(*min_key), attributes.get(*max_key)) else {
            continue;
        };
        seen += 1;
        match (min.as_f64(), max.as_f64()) {
            (Some(min), Some(max)) if min <= max => {}
            (Some(min), Some(max)) => {
                report.push(CheckResult::fail(
                    VALIDATOR,
                    format!("{context}: {min_key} {min} exceeds {max_key} {max}"),
                ));
            }
            _ => {
                report.push(CheckResult::fail(
                    VALIDATOR,
                    format!("{context}: non-numeric {min_key}/{max_key} bounds"),
                ));
            }
        }
    }
    seen
}
