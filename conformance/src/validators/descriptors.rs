//! Descriptor completeness and uniqueness validator.
//!
//! Enforces the structural rules every record must satisfy regardless of
//! content:
//! - `id`, `name`, and `description` are present and non-empty on the
//!   dictionary header, data types, entities, properties, enumerations;
//!   properties additionally need a non-empty `type`;
//! - ids are unique: data types / entities / enumerations within the
//!   dictionary, properties within their entity;
//! - every property id is namespaced by its owning entity
//!   (`atom.element` under entity `atom`).

use std::collections::BTreeSet;

use lexicon_dictionary::Dictionary;

use crate::report::{CheckResult, Report};

const VALIDATOR: &str = "descriptors";

/// Validates descriptor completeness and id uniqueness.
#[must_use]
pub fn validate(dictionary: &Dictionary) -> Report {
    let mut report = Report::new();
    let before = report.failure_count();

    check_header(dictionary, &mut report);
    check_data_types(dictionary, &mut report);
    check_entities(dictionary, &mut report);
    check_enumerations(dictionary, &mut report);

    if report.failure_count() == before {
        report.push(CheckResult::pass(
            VALIDATOR,
            format!(
                "All records complete and uniquely identified ({} data types, {} entities, {} properties, {} enumerations)",
                dictionary.data_types.len(),
                dictionary.entities.len(),
                dictionary.property_count(),
                dictionary.enumerations.len()
            ),
        ));
    }
    report
}

fn check_header(dictionary: &Dictionary, report: &mut Report) {
    let context = format!("dictionary {}", dictionary.id);
    require(report, &context, "id", &dictionary.id);
    require(report, &context, "name", &dictionary.name);
    require(report, &context, "description", &dictionary.description);
}

fn check_data_types(dictionary: &Dictionary, report: &mut Report) {
    for data_type in &dictionary.data_types {
        let context = format!("data type {}", data_type.id);
        require(report, &context, "id", &data_type.id);
        require(report, &context, "name", &data_type.name);
        require(report, &context, "description", &data_type.description);
    }
    check_unique(
        report,
        "data type",
        dictionary.data_types.iter().map(|t| t.id.as_str()),
    );
}

fn check_entities(dictionary: &Dictionary, report: &mut Report) {
    for entity in &dictionary.entities {
        let context = format!("entity {}", entity.id);
        require(report, &context, "id", &entity.id);
        require(report, &context, "name", &entity.name);
        require(report, &context, "description", &entity.description);

        let prefix = format!("{}.", entity.id);
        for property in &entity.properties {
            let context = format!("property {}", property.id);
            require(report, &context, "id", &property.id);
            require(report, &context, "name", &property.name);
            require(report, &context, "type", &property.type_id);
            require(report, &context, "description", &property.description);

            if !property.id.starts_with(&prefix) {
                report.push(CheckResult::fail(
                    VALIDATOR,
                    format!(
                        "Property {} is not namespaced by its entity {}",
                        property.id, entity.id
                    ),
                ));
            }
        }
        check_unique(
            report,
            &format!("property (entity {})", entity.id),
            entity.properties.iter().map(|p| p.id.as_str()),
        );
    }
    check_unique(
        report,
        "entity",
        dictionary.entities.iter().map(|e| e.id.as_str()),
    );
}

fn check_enumerations(dictionary: &Dictionary, report: &mut Report) {
    for enumeration in &dictionary.enumerations {
        let context = format!("enumeration {}", enumeration.id);
        require(report, &context, "id", &enumeration.id);
        require(report, &context, "name", &enumeration.name);
        require(report, &context, "description", &enumeration.description);
    }
    check_unique(
        report,
        "enumeration",
        dictionary.enumerations.iter().map(|e| e.id.as_str()),
    );
}

/// Pushes a failure when a required field is empty.
fn require(report: &mut Report, context: &str, field: &str, value: &str) {
    if value.trim().is_empty() {
        report.push(CheckResult::fail(
            VALIDATOR,
            format!("Missing or empty {field} in {context}"),
        ));
    }
}

/// Pushes one failure per duplicated id in the iterator.
fn check_unique<'a>(report: &mut Report, label: &str, ids: impl Iterator<Item = &'a str>) {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            report.push(CheckResult::fail(
                VALIDATOR,
                format!("Duplicate {label} id: {id}"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_dictionary;

    #[test]
    fn sample_dictionary_passes() {
        let report = validate(&sample_dictionary());
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn empty_description_fails() {
        let mut dictionary = sample_dictionary();
        dictionary.entities[0].properties[0].description.clear();
        let report = validate(&dictionary);
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn duplicate_property_ids_fail() {
        let mut dictionary = sample_dictionary();
        let copy = dictionary.entities[0].properties[0].clone();
        dictionary.entities[0].properties.push(copy);
        let report = validate(&dictionary);
        assert!(!report.all_passed());
    }

    #[test]
    fn duplicate_data_type_ids_fail() {
        let mut dictionary = sample_dictionary();
        let copy = dictionary.data_types[0].clone();
        dictionary.data_types.push(copy);
        let report = validate(&dictionary);
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn duplicate_entity_ids_fail() {
        let mut dictionary = sample_dictionary();
        let mut copy = dictionary.entities[0].clone();
        // Clear the copy's properties so only the entity id collides.
        copy.properties.clear();
        dictionary.entities.push(copy);
        let report = validate(&dictionary);
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn foreign_namespace_fails() {
        let mut dictionary = sample_dictionary();
        dictionary.entities[0].properties[0].id = "bond.order".to_owned();
        let report = validate(&dictionary);
        assert!(!report.all_passed());
    }
}
