//! YAML loaders for the on-disk dictionary tree.
//!
//! A dictionary on disk is a directory shaped like this:
//!
//! ```text
//! dictionary.yaml              header: id, name, version, ...
//! data-types.yaml              sequence of data types
//! data-type-attributes/        optional per-type attribute overrides
//!   <type-id>.yaml
//! entities.yaml                sequence of entities
//! properties-by-entity/        one property file per entity (required)
//!   <entity-id>.yaml
//! enumerations.yaml            optional sequence of enumerations
//! ```
//!
//! Every list file must hold a YAML sequence at the document root; a
//! mapping root is a parse error. Unknown keys are tolerated everywhere.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::DictionaryError;
use crate::model::{Attributes, DataType, Dictionary, Entity, Enumeration, Property};

/// Version tags accepted in place of a semantic version.
const MOVING_VERSIONS: [&str; 2] = ["master", "development"];

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, DictionaryError> {
    debug!(path = %path.display(), "reading dictionary file");
    let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| DictionaryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl DataType {
    /// Loads a sequence of data types from a YAML file.
    ///
    /// For each type whose id has a matching
    /// `data-type-attributes/<id>.yaml` next to `path`, that file's content
    /// replaces the inline `attributes` mapping.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] or [`DictionaryError::Parse`] when
    /// the list file or an attribute override cannot be read or parsed.
    pub fn load_all(path: &Path) -> Result<Vec<DataType>, DictionaryError> {
        let mut data_types: Vec<DataType> = read_yaml(path)?;
        let overrides = parent_dir(path).join("data-type-attributes");
        for data_type in &mut data_types {
            let override_path = overrides.join(format!("{}.yaml", data_type.id));
            if override_path.exists() {
                debug!(
                    data_type = %data_type.id,
                    path = %override_path.display(),
                    "applying data type attribute override"
                );
                data_type.attributes = read_yaml::<Attributes>(&override_path)?;
            }
        }
        Ok(data_types)
    }
}

impl Property {
    /// Loads a sequence of property descriptors from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] or [`DictionaryError::Parse`] when
    /// the file cannot be read or parsed.
    pub fn load_all(path: &Path) -> Result<Vec<Property>, DictionaryError> {
        read_yaml(path)
    }
}

impl Entity {
    /// Loads a sequence of entities from a YAML file, then loads each
    /// entity's properties from the sibling
    /// `properties-by-entity/<entity-id>.yaml` file.
    ///
    /// A property file is required for every listed entity and replaces any
    /// inline `properties` block.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] or [`DictionaryError::Parse`] when
    /// the entity list or any per-entity property file cannot be read or
    /// parsed.
    pub fn load_all(path: &Path) -> Result<Vec<Entity>, DictionaryError> {
        let mut entities: Vec<Entity> = read_yaml(path)?;
        let properties_dir = parent_dir(path).join("properties-by-entity");
        for entity in &mut entities {
            let properties_path = properties_dir.join(format!("{}.yaml", entity.id));
            entity.properties = Property::load_all(&properties_path)?;
        }
        Ok(entities)
    }
}

impl Enumeration {
    /// Loads a sequence of enumerations from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] or [`DictionaryError::Parse`] when
    /// the file cannot be read or parsed, and
    /// [`DictionaryError::Validation`] when an enumeration holds duplicate
    /// value ids or duplicate integral values.
    pub fn load_all(path: &Path) -> Result<Vec<Enumeration>, DictionaryError> {
        let enumerations: Vec<Enumeration> = read_yaml(path)?;
        for enumeration in &enumerations {
            enumeration.check_value_uniqueness()?;
        }
        Ok(enumerations)
    }

    fn check_value_uniqueness(&self) -> Result<(), DictionaryError> {
        let ids: BTreeSet<&str> = self.values.iter().map(|v| v.id.as_str()).collect();
        if ids.len() != self.values.len() {
            return Err(DictionaryError::Validation(format!(
                "duplicate value ids in enumeration {}",
                self.id
            )));
        }
        let integrals: BTreeSet<i64> = self.values.iter().map(|v| v.integral_value).collect();
        if integrals.len() != self.values.len() {
            return Err(DictionaryError::Validation(format!(
                "duplicate integral values in enumeration {}",
                self.id
            )));
        }
        Ok(())
    }
}

impl Dictionary {
    /// Loads a complete dictionary tree rooted at a `dictionary.yaml` file.
    ///
    /// Reads the header, checks the version, then loads the sibling
    /// `data-types.yaml` and `entities.yaml` (both required) and the
    /// optional `enumerations.yaml`.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] or [`DictionaryError::Parse`] when
    /// any required file cannot be read or parsed, and
    /// [`DictionaryError::Validation`] when the version string is neither a
    /// moving tag (`master`, `development`) nor a valid semantic version,
    /// or an enumeration fails its uniqueness checks.
    pub fn load(path: &Path) -> Result<Dictionary, DictionaryError> {
        let mut dictionary: Dictionary = read_yaml(path)?;
        dictionary.check_version()?;

        let root = parent_dir(path);
        dictionary.data_types = DataType::load_all(&root.join("data-types.yaml"))?;
        dictionary.entities = Entity::load_all(&root.join("entities.yaml"))?;

        let enumerations_path = root.join("enumerations.yaml");
        if enumerations_path.exists() {
            dictionary.enumerations = Enumeration::load_all(&enumerations_path)?;
        }

        debug!(
            dictionary = %dictionary.id,
            data_types = dictionary.data_types.len(),
            entities = dictionary.entities.len(),
            enumerations = dictionary.enumerations.len(),
            "dictionary loaded"
        );
        Ok(dictionary)
    }

    fn check_version(&self) -> Result<(), DictionaryError> {
        if MOVING_VERSIONS.contains(&self.version.as_str()) {
            return Ok(());
        }
        if semver::Version::parse(&self.version).is_err() {
            return Err(DictionaryError::Validation(format!(
                "version {} in dictionary {} is invalid",
                self.version, self.id
            )));
        }
        Ok(())
    }
}

fn parent_dir(path: &Path) -> std::path::PathBuf {
    path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf()
}
