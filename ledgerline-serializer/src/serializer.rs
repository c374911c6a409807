use crate::names::polymorphic_type_tag;
use crate::{
    CamelCaseLinks, CanonicalRelationships, KeyTranscoder, LinkNormalizer, RelationshipExtractor,
    SerializerError, SerializerResult, SnakeCaseKeys,
};
use ledgerline_model::{
    ModelRegistry, ModelSchema, Record, RelationshipDescriptor, RelationshipKind,
    RelationshipValue, ResourceIdentifier, normalize_model_name,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// The primary data of a normalized response document.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimaryData {
    Single(Record),
    Many(Vec<Record>),
    Empty,
}

impl PrimaryData {
    pub fn into_vec(self) -> Vec<Record> {
        match self {
            PrimaryData::Single(record) => vec![record],
            PrimaryData::Many(records) => records,
            PrimaryData::Empty => Vec::new(),
        }
    }
}

/// A normalized response: primary records, side-loaded records and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub data: PrimaryData,
    pub included: Vec<Record>,
    pub meta: Option<Value>,
}

impl Document {
    pub fn empty() -> Self {
        Self {
            data: PrimaryData::Empty,
            included: Vec::new(),
            meta: None,
        }
    }
}

/// Converts between wire resources and [`Record`]s using pluggable naming
/// strategies.
#[derive(Clone)]
pub struct RestSerializer {
    keys: Arc<dyn KeyTranscoder>,
    relationships: Arc<dyn RelationshipExtractor>,
    links: Arc<dyn LinkNormalizer>,
}

impl Default for RestSerializer {
    fn default() -> Self {
        Self::new(
            Arc::new(SnakeCaseKeys),
            Arc::new(CanonicalRelationships),
            Arc::new(CamelCaseLinks),
        )
    }
}

impl std::fmt::Debug for RestSerializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestSerializer").finish_non_exhaustive()
    }
}

impl RestSerializer {
    pub fn new(
        keys: Arc<dyn KeyTranscoder>,
        relationships: Arc<dyn RelationshipExtractor>,
        links: Arc<dyn LinkNormalizer>,
    ) -> Self {
        Self {
            keys,
            relationships,
            links,
        }
    }

    pub fn keys(&self) -> &dyn KeyTranscoder {
        self.keys.as_ref()
    }

    // ── Normalize ────────────────────────────────────────────────

    /// Normalizes one wire resource of the model described by `schema`.
    ///
    /// Links are camelized and relationships moved to their canonical keys
    /// before attributes and references are read. Wire keys the schema does
    /// not declare are ignored.
    pub fn normalize(
        &self,
        schema: &ModelSchema,
        hash: &Map<String, Value>,
    ) -> SerializerResult<Record> {
        let keys = self.keys.as_ref();
        let hash = self.links.normalize_links(hash, keys);
        let hash = self.relationships.extract(schema, &hash, keys);

        let id = match hash.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => {
                return Err(SerializerError::MissingId {
                    model: schema.model_name.clone(),
                });
            }
        };
        let mut record = Record::new(&schema.model_name).with_id(id);

        for attribute in schema.attributes() {
            if let Some(value) = hash.get(&keys.key_for_attribute(&attribute.name)) {
                record
                    .attributes
                    .insert(attribute.name.clone(), value.clone());
            }
        }

        for relationship in schema.relationships() {
            let key = keys.key_for_relationship(&relationship.name, Some(relationship.kind));
            if let Some(value) = hash.get(&key) {
                record.relationships.insert(
                    relationship.name.clone(),
                    self.relationship_value(relationship, value)?,
                );
            }
        }

        if let Some(Value::Object(links)) = hash.get("links") {
            record.links = links.clone();
        }

        Ok(record)
    }

    /// Normalizes a whole response document.
    ///
    /// Each root key is mapped to a model name; the first root naming
    /// `primary_model` becomes the primary data, other known models are
    /// side-loaded into `included`, `meta` is kept verbatim and unknown roots
    /// are skipped.
    pub fn normalize_response(
        &self,
        registry: &ModelRegistry,
        primary_model: &str,
        payload: &Value,
    ) -> SerializerResult<Document> {
        let root = match payload {
            Value::Object(root) => root,
            Value::Null => return Ok(Document::empty()),
            _ => return Err(SerializerError::ExpectedObject("payload".to_string())),
        };

        let primary_model = normalize_model_name(primary_model);
        let mut data = None;
        let mut included = Vec::new();

        for (payload_key, value) in root {
            if payload_key == "meta" {
                continue;
            }

            let model_name = self.keys.model_name_from_payload_key(payload_key);
            let Ok(schema) = registry.schema_for(&model_name) else {
                warn!(
                    payload_key = %payload_key,
                    "no model found for payload key, skipping"
                );
                continue;
            };
            let is_primary = data.is_none() && model_name == primary_model;

            match value {
                Value::Object(hash) => {
                    let record = self.normalize(schema, hash)?;
                    if is_primary {
                        data = Some(PrimaryData::Single(record));
                    } else {
                        included.push(record);
                    }
                }
                Value::Array(items) => {
                    let records = items
                        .iter()
                        .map(|item| match item {
                            Value::Object(hash) => self.normalize(schema, hash),
                            _ => Err(SerializerError::ExpectedObject(payload_key.clone())),
                        })
                        .collect::<SerializerResult<Vec<_>>>()?;
                    if is_primary {
                        data = Some(PrimaryData::Many(records));
                    } else {
                        included.extend(records);
                    }
                }
                Value::Null => {
                    if is_primary {
                        data = Some(PrimaryData::Empty);
                    }
                }
                _ => return Err(SerializerError::ExpectedObject(payload_key.clone())),
            }
        }

        debug!(
            model = %primary_model,
            included = included.len(),
            "normalized response"
        );

        Ok(Document {
            data: data.unwrap_or(PrimaryData::Empty),
            included,
            meta: root.get("meta").cloned(),
        })
    }

    fn relationship_value(
        &self,
        relationship: &RelationshipDescriptor,
        value: &Value,
    ) -> SerializerResult<RelationshipValue> {
        match relationship.kind {
            RelationshipKind::BelongsTo => Ok(RelationshipValue::One(
                self.resource_identifier(relationship, value)?,
            )),
            RelationshipKind::HasMany => match value {
                Value::Null => Ok(RelationshipValue::Many(Vec::new())),
                Value::Array(items) => {
                    let mut targets = Vec::with_capacity(items.len());
                    for item in items {
                        if let Some(target) = self.resource_identifier(relationship, item)? {
                            targets.push(target);
                        }
                    }
                    Ok(RelationshipValue::Many(targets))
                }
                other => Err(invalid_relationship(relationship, other)),
            },
        }
    }

    fn resource_identifier(
        &self,
        relationship: &RelationshipDescriptor,
        value: &Value,
    ) -> SerializerResult<Option<ResourceIdentifier>> {
        match value {
            Value::Null => Ok(None),
            Value::String(id) => Ok(Some(ResourceIdentifier::new(
                id.clone(),
                relationship.target.clone(),
            ))),
            Value::Number(id) => Ok(Some(ResourceIdentifier::new(
                id.to_string(),
                relationship.target.clone(),
            ))),
            Value::Object(identifier) => {
                let id = match identifier.get("id") {
                    Some(Value::String(id)) => id.clone(),
                    Some(Value::Number(id)) => id.to_string(),
                    _ => return Err(invalid_relationship(relationship, value)),
                };
                let model_name = match identifier.get("type").and_then(Value::as_str) {
                    Some(type_tag) => self.keys.model_name_from_payload_key(type_tag),
                    None => relationship.target.clone(),
                };
                Ok(Some(ResourceIdentifier::new(id, model_name)))
            }
            other => Err(invalid_relationship(relationship, other)),
        }
    }

    // ── Serialize ────────────────────────────────────────────────

    /// Serializes a record to its wire resource.
    ///
    /// Attributes the record does not hold are omitted. To-one relationships
    /// are always written (`null` when unset), with a class-style
    /// `<name>_type` tag next to polymorphic ones. To-many relationships are
    /// never written; the API owns those collections.
    pub fn serialize(
        &self,
        schema: &ModelSchema,
        record: &Record,
        include_id: bool,
    ) -> Map<String, Value> {
        let keys = self.keys.as_ref();
        let mut json = Map::new();

        if include_id {
            if let Some(id) = &record.id {
                json.insert("id".to_string(), Value::String(id.clone()));
            }
        }

        for attribute in schema.attributes() {
            if let Some(value) = record.get(&attribute.name) {
                json.insert(keys.key_for_attribute(&attribute.name), value.clone());
            }
        }

        for relationship in schema.relationships() {
            if relationship.kind == RelationshipKind::HasMany {
                continue;
            }
            let target = record.belongs_to(&relationship.name);
            json.insert(
                keys.key_for_relationship(&relationship.name, Some(relationship.kind)),
                target.map_or(Value::Null, |t| Value::String(t.id.clone())),
            );
            if relationship.polymorphic {
                json.insert(
                    keys.key_for_polymorphic_type(&relationship.name),
                    target.map_or(Value::Null, |t| {
                        Value::String(polymorphic_type_tag(&t.model_name))
                    }),
                );
            }
        }

        json
    }

    /// Serializes a record wrapped under its payload root key
    /// (`{"transaction_event": {...}}`).
    pub fn serialize_into_hash(
        &self,
        schema: &ModelSchema,
        record: &Record,
        include_id: bool,
    ) -> Map<String, Value> {
        let mut root = Map::new();
        root.insert(
            self.keys.payload_key_from_model_name(&schema.model_name),
            Value::Object(self.serialize(schema, record, include_id)),
        );
        root
    }
}

fn invalid_relationship(relationship: &RelationshipDescriptor, value: &Value) -> SerializerError {
    SerializerError::InvalidRelationship {
        relationship: relationship.name.clone(),
        value: value.to_string(),
    }
}
