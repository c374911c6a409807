use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cardinality of a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationshipKind {
    /// A single reference, sent on the wire as `<name>_id`.
    BelongsTo,
    /// A collection of references, sent on the wire as `<singular name>_ids`.
    HasMany,
}

impl RelationshipKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipKind::BelongsTo => "belongsTo",
            RelationshipKind::HasMany => "hasMany",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "belongsTo" | "belongs-to" | "belongs_to" => Ok(RelationshipKind::BelongsTo),
            "hasMany" | "has-many" | "has_many" => Ok(RelationshipKind::HasMany),
            other => Err(ModelError::UnknownRelationshipKind(other.to_string())),
        }
    }
}

/// The value type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Boolean,
    Number,
    Date,
}

/// A plain attribute declared on a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    /// camelCase attribute name (e.g., "cardNumber").
    pub name: String,
    pub attr_type: AttributeType,
}

impl AttributeDescriptor {
    fn typed(name: &str, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
        }
    }

    pub fn string(name: &str) -> Self {
        Self::typed(name, AttributeType::String)
    }

    pub fn boolean(name: &str) -> Self {
        Self::typed(name, AttributeType::Boolean)
    }

    pub fn number(name: &str) -> Self {
        Self::typed(name, AttributeType::Number)
    }

    pub fn date(name: &str) -> Self {
        Self::typed(name, AttributeType::Date)
    }
}

/// A relationship declared on a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipDescriptor {
    /// camelCase relationship name (e.g., "transactionEvents").
    pub name: String,
    pub kind: RelationshipKind,
    /// Normalized name of the related model (e.g., "transaction-event").
    pub target: String,
    /// Whether the related record may be of any model; the wire carries a type tag.
    #[serde(default)]
    pub polymorphic: bool,
    /// Whether the related records are loaded lazily.
    #[serde(default = "default_async", rename = "async")]
    pub is_async: bool,
    #[serde(default, skip_serializing_if = "Inverse::is_inferred")]
    pub inverse: Inverse,
}

/// How a relationship pairs with one on its target model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Inverse {
    /// Paired with whichever relationship on the target points back at this model.
    #[default]
    Inferred,
    /// Declared without an inverse; neither side updates the other.
    Disabled,
    /// Paired with the named relationship on the target model.
    Named(String),
}

impl Inverse {
    pub fn is_inferred(&self) -> bool {
        matches!(self, Inverse::Inferred)
    }

    /// Whether `relationship` on the target model may act as this inverse.
    pub fn accepts(&self, relationship: &str) -> bool {
        match self {
            Inverse::Inferred => true,
            Inverse::Disabled => false,
            Inverse::Named(name) => name == relationship,
        }
    }
}

fn default_async() -> bool {
    true
}

impl RelationshipDescriptor {
    fn new(name: &str, kind: RelationshipKind, target: &str) -> Self {
        Self {
            name: name.into(),
            kind,
            target: target.into(),
            polymorphic: false,
            is_async: true,
            inverse: Inverse::Inferred,
        }
    }

    /// Shorthand for a to-one relationship.
    pub fn belongs_to(name: &str, target: &str) -> Self {
        Self::new(name, RelationshipKind::BelongsTo, target)
    }

    /// Shorthand for a to-many relationship.
    pub fn has_many(name: &str, target: &str) -> Self {
        Self::new(name, RelationshipKind::HasMany, target)
    }

    #[must_use]
    pub fn polymorphic(mut self) -> Self {
        self.polymorphic = true;
        self
    }

    #[must_use]
    pub fn synchronous(mut self) -> Self {
        self.is_async = false;
        self
    }

    #[must_use]
    pub fn inverse(mut self, inverse: &str) -> Self {
        self.inverse = Inverse::Named(inverse.into());
        self
    }

    /// Declares that the relationship has no inverse.
    #[must_use]
    pub fn without_inverse(mut self) -> Self {
        self.inverse = Inverse::Disabled;
        self
    }
}

/// Describes a model's wire-relevant structure.
///
/// Attributes and relationships keep their declaration order; the relationship
/// extractor relies on it for reproducible fallback-key detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSchema {
    pub model_name: String,
    #[serde(default)]
    pub attributes: Vec<AttributeDescriptor>,
    #[serde(default)]
    pub relationships: Vec<RelationshipDescriptor>,
}

impl ModelSchema {
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.into(),
            attributes: Vec::new(),
            relationships: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeDescriptor) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn with_relationship(mut self, relationship: RelationshipDescriptor) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Iterates relationships in declaration order.
    pub fn relationships(&self) -> impl Iterator<Item = &RelationshipDescriptor> {
        self.relationships.iter()
    }

    /// Iterates attributes in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.attributes.iter()
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn relationship(&self, name: &str) -> Option<&RelationshipDescriptor> {
        self.relationships.iter().find(|r| r.name == name)
    }
}
