use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A reference to another record: its id and concrete model name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    pub id: String,
    #[serde(rename = "type")]
    pub model_name: String,
}

impl ResourceIdentifier {
    pub fn new(id: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model_name: model_name.into(),
        }
    }
}

/// The resolved value of one relationship on a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipValue {
    Many(Vec<ResourceIdentifier>),
    One(Option<ResourceIdentifier>),
}

/// A normalized resource as held in memory.
///
/// Attribute and link keys are camelCase. Relationships are resolved to
/// [`ResourceIdentifier`]s; the related records themselves are not loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: Option<String>,
    pub model_name: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub relationships: BTreeMap<String, RelationshipValue>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub links: Map<String, Value>,
}

impl Record {
    /// Creates an unsaved record with no attributes.
    pub fn new(model_name: &str) -> Self {
        Self {
            id: None,
            model_name: model_name.into(),
            attributes: Map::new(),
            relationships: BTreeMap::new(),
            links: Map::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_belongs_to(mut self, name: &str, target: Option<ResourceIdentifier>) -> Self {
        self.relationships
            .insert(name.into(), RelationshipValue::One(target));
        self
    }

    #[must_use]
    pub fn with_has_many(mut self, name: &str, targets: Vec<ResourceIdentifier>) -> Self {
        self.relationships
            .insert(name.into(), RelationshipValue::Many(targets));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn get_number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// The reference held by a to-one relationship, if set.
    pub fn belongs_to(&self, name: &str) -> Option<&ResourceIdentifier> {
        match self.relationships.get(name) {
            Some(RelationshipValue::One(target)) => target.as_ref(),
            _ => None,
        }
    }

    /// The references held by a to-many relationship; empty when unset.
    pub fn has_many(&self, name: &str) -> &[ResourceIdentifier] {
        match self.relationships.get(name) {
            Some(RelationshipValue::Many(targets)) => targets,
            _ => &[],
        }
    }
}
