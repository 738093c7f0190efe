//! The shipped common dictionary must pass the full conformance suite.

use std::path::Path;

use lexicon_dictionary::Dictionary;

fn common_dictionary() -> Dictionary {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../dictionaries/common/dictionary.yaml");
    Dictionary::load(&path).unwrap()
}

#[test]
fn common_dictionary_conforms() {
    let report = lexicon_conformance::run_all(&common_dictionary());
    let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
    assert!(failures.is_empty(), "conformance failures: {failures:#?}");
    assert_eq!(report.warning_count(), 0);
}

#[test]
fn common_dictionary_inventory() {
    let dictionary = common_dictionary();
    assert_eq!(dictionary.data_types.len(), 8);
    assert_eq!(dictionary.entities.len(), 2);
    assert_eq!(dictionary.enumerations.len(), 2);
    assert_eq!(dictionary.property_count(), 14);

    // The attribute override file bounds elementid to the periodic table.
    let elementid = dictionary.data_type_by_id("elementid").unwrap();
    assert_eq!(
        elementid.attributes["maximum_value"],
        serde_yaml::Value::from(118)
    );
}

#[test]
fn formal_charge_bounds_hold() {
    let dictionary = common_dictionary();
    let atom = dictionary.entity_by_id("atom").unwrap();
    let charge = atom.property_by_id("atom.formal_charge").unwrap();
    assert_eq!(charge.attributes["minimum_value"], serde_yaml::Value::from(-100));
    assert_eq!(charge.attributes["maximum_value"], serde_yaml::Value::from(100));
}
