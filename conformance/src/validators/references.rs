//! Cross-reference validator.
//!
//! Every property's `type` must name a data type declared in the same
//! dictionary. Referencing a deprecated data type from a live property is
//! allowed but flagged as a warning.

use lexicon_dictionary::Dictionary;

use crate::report::{CheckResult, Report};

const VALIDATOR: &str = "references";

/// Validates that property type references resolve.
#[must_use]
pub fn validate(dictionary: &Dictionary) -> Report {
    let mut report = Report::new();
    let before = report.failure_count();
    let mut resolved = 0usize;

    for entity in &dictionary.entities {
        for property in &entity.properties {
            match dictionary.data_type_by_id(&property.type_id) {
                Some(data_type) => {
                    resolved += 1;
                    if data_type.deprecated && !property.deprecated {
                        report.push(CheckResult::warn(
                            VALIDATOR,
                            format!(
                                "Property {} uses deprecated data type {}",
                                property.id, data_type.id
                            ),
                        ));
                    }
                }
                None => {
                    report.push(CheckResult::fail(
                        VALIDATOR,
                        format!(
                            "Property {} references unknown data type {}",
                            property.id, property.type_id
                        ),
                    ));
                }
            }
        }
    }

    if report.failure_count() == before {
        report.push(CheckResult::pass(
            VALIDATOR,
            format!("All {resolved} property type references resolve"),
        ));
    }
    report
}
