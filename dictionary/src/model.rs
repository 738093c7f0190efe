//! Core dictionary model types.
//!
//! These types mirror the on-disk YAML records one to one; the serde derives
//! define the accepted shape. Fields the format treats as optional carry
//! `#[serde(default)]`, so a record missing a required field (`id`, `name`,
//! property `type`, enumeration `integral_value`) fails to deserialize.
//!
//! Records never point back at their owner; navigation across records goes
//! through the [`Dictionary`] root (`data_type_by_id`, `entity_by_id`, ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form constraint map attached to data types, entities, and
/// properties (`minimum_value`, `maximum_value`, codegen hints, ...).
///
/// Values are kept as raw YAML; interpreting them is the consumer's job.
pub type Attributes = BTreeMap<String, serde_yaml::Value>;

/// A named data type referenced by property descriptors (`int32`, `bool`,
/// `elementid`, `point_2d`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataType {
    /// Unique identifier within the dictionary.
    pub id: String,
    /// Human-readable display label.
    pub name: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Whether the type has value or reference semantics.
    #[serde(default = "default_semantics")]
    pub semantics: String,
    /// Custom attributes, used to inform code generation.
    #[serde(default)]
    pub attributes: Attributes,
    /// Whether the type is deprecated and should no longer be used.
    #[serde(default)]
    pub deprecated: bool,
}

fn default_semantics() -> String {
    "value".to_owned()
}

/// A property descriptor: one named, typed attribute of an entity.
///
/// The `id` is namespaced by the owning entity (`atom.element`,
/// `bond.order`). Descriptions may span multiple lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Dotted, entity-namespaced identifier.
    pub id: String,
    /// Human-readable display label.
    pub name: String,
    /// Identifier of the data type this property carries.
    #[serde(rename = "type")]
    pub type_id: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Constraints extending the data type (`minimum_value`, ...).
    #[serde(default)]
    pub attributes: Attributes,
    /// Whether the property is deprecated and should no longer be used.
    #[serde(default)]
    pub deprecated: bool,
}

/// A base entity (atom, bond, ...) and the properties it can carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier within the dictionary.
    pub id: String,
    /// Human-readable display label.
    pub name: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Properties of this entity. When the entity is loaded from an
    /// `entities.yaml` file, these come from the sibling
    /// `properties-by-entity/<id>.yaml` file.
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Custom attributes of the entity.
    #[serde(default)]
    pub attributes: Attributes,
    /// Whether the entity is deprecated and should no longer be used.
    #[serde(default)]
    pub deprecated: bool,
}

impl Entity {
    /// Returns the property with the given id, if any.
    #[must_use]
    pub fn property_by_id(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }
}

/// One admissible value of an enumeration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumerationValue {
    /// Unique identifier within the enumeration.
    pub id: String,
    /// Unique numeric value within the enumeration.
    pub integral_value: i64,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Whether the value is deprecated and should no longer be used.
    #[serde(default)]
    pub deprecated: bool,
}

/// A closed set of named values a property can draw from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enumeration {
    /// Unique identifier within the dictionary.
    pub id: String,
    /// Human-readable display label.
    pub name: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// The admissible values. Value ids and integral values must each be
    /// unique within the enumeration; the loader enforces this.
    #[serde(default)]
    pub values: Vec<EnumerationValue>,
    /// Whether the enumeration is deprecated and should no longer be used.
    #[serde(default)]
    pub deprecated: bool,
}

impl Enumeration {
    /// Returns the value with the given id, if any.
    #[must_use]
    pub fn value_by_id(&self, id: &str) -> Option<&EnumerationValue> {
        self.values.iter().find(|v| v.id == id)
    }
}

/// A complete dictionary: header metadata plus the data types, entities,
/// and enumerations loaded from the sibling files of `dictionary.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dictionary {
    /// Unique identifier of the dictionary.
    pub id: String,
    /// Human-readable display label.
    pub name: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Dictionary version: a semantic version, or the moving tags
    /// `master` / `development`.
    pub version: String,
    /// Whether the whole dictionary is deprecated.
    #[serde(default)]
    pub deprecated: bool,
    /// Data types, from `data-types.yaml`.
    #[serde(default)]
    pub data_types: Vec<DataType>,
    /// Entities, from `entities.yaml` and `properties-by-entity/`.
    #[serde(default)]
    pub entities: Vec<Entity>,
    /// Enumerations, from the optional `enumerations.yaml`.
    #[serde(default)]
    pub enumerations: Vec<Enumeration>,
}

impl Dictionary {
    /// Returns the data type with the given id, if any.
    #[must_use]
    pub fn data_type_by_id(&self, id: &str) -> Option<&DataType> {
        self.data_types.iter().find(|t| t.id == id)
    }

    /// Returns the entity with the given id, if any.
    #[must_use]
    pub fn entity_by_id(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Returns the enumeration with the given id, if any.
    #[must_use]
    pub fn enumeration_by_id(&self, id: &str) -> Option<&Enumeration> {
        self.enumerations.iter().find(|e| e.id == id)
    }

    /// Total number of property descriptors across all entities.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.entities.iter().map(|e| e.properties.len()).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn property_from_yaml() {
        let property: Property = serde_yaml::from_str(
            r"
            id: atom.formal_charge
            name: Formal charge
            type: int32
            description: The formal charge of the atom.
            attributes:
              minimum_value: -100
              maximum_value: 100
            ",
        )
        .unwrap();
        assert_eq!(property.id, "atom.formal_charge");
        assert_eq!(property.type_id, "int32");
        assert!(!property.deprecated);
        assert!(property.attributes.contains_key("minimum_value"));
    }

    #[test]
    fn property_without_type_is_rejected() {
        let result: Result<Property, _> = serde_yaml::from_str(
            r"
            id: atom.element
            name: Element
            ",
        );
        assert!(result.is_err());
    }

    #[test]
    fn data_type_defaults() {
        let data_type: DataType = serde_yaml::from_str(
            r"
            id: int32
            name: 32-bit integer
            ",
        )
        .unwrap();
        assert_eq!(data_type.semantics, "value");
        assert!(data_type.description.is_empty());
        assert!(data_type.attributes.is_empty());
        assert!(!data_type.deprecated);
    }

    #[test]
    fn entity_with_inline_properties() {
        let entity: Entity = serde_yaml::from_str(
            r"
            id: atom
            name: Atom
            properties:
              - id: atom.index
                name: Index
                type: int32
            ",
        )
        .unwrap();
        assert_eq!(entity.property_by_id("atom.index").unwrap().type_id, "int32");
        assert!(entity.property_by_id("atom.element").is_none());
    }

    #[test]
    fn enumeration_value_lookup() {
        let enumeration: Enumeration = serde_yaml::from_str(
            r"
            id: bond_order
            name: Bond order
            values:
              - id: single
                integral_value: 1
              - id: double
                integral_value: 2
            ",
        )
        .unwrap();
        assert_eq!(enumeration.value_by_id("double").unwrap().integral_value, 2);
        assert!(enumeration.value_by_id("quadruple").is_none());
    }

    #[test]
    fn mapping_at_document_root_is_rejected() {
        // Property files must be a sequence at the document root.
        let result: Result<Vec<Property>, _> = serde_yaml::from_str(
            r"
            atom.element:
              name: Element
              type: elementid
            ",
        );
        assert!(result.is_err());
    }

    #[test]
    fn multi_line_descriptions_survive() {
        let property: Property = serde_yaml::from_str(
            "id: atom.isotope\nname: Isotope\ntype: int32\ndescription: >\n  Mass number of the isotope,\n  or zero when unspecified.\n",
        )
        .unwrap();
        assert!(property.description.contains("Mass number"));
    }
}
