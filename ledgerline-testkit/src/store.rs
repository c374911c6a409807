use crate::{Factory, TestkitError, TestkitResult};
use ledgerline_inflector::pluralize;
use ledgerline_model::models::domain_registry;
use ledgerline_model::{
    Inverse, ModelRegistry, Record, RelationshipKind, RelationshipValue, ResourceIdentifier,
    normalize_model_name,
};
use ledgerline_serializer::RestSerializer;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// In-memory records, grouped by model, that render as API payloads.
///
/// Creating a record whose to-one relationship points at a stored record
/// also appends the new record to that record's matching to-many
/// relationship, so both sides of the association stay in step. Either side
/// declared without an inverse opts out.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    registry: ModelRegistry,
    serializer: RestSerializer,
    records: BTreeMap<String, Vec<Record>>,
    next_ids: HashMap<String, u64>,
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new(domain_registry())
    }
}

impl FixtureStore {
    pub fn new(registry: ModelRegistry) -> Self {
        Self::with_serializer(registry, RestSerializer::default())
    }

    pub fn with_serializer(registry: ModelRegistry, serializer: RestSerializer) -> Self {
        Self {
            registry,
            serializer,
            records: BTreeMap::new(),
            next_ids: HashMap::new(),
        }
    }

    /// Stores a record, assigning the next sequential id when it has none.
    pub fn create(&mut self, mut record: Record) -> TestkitResult<Record> {
        let model_name = normalize_model_name(&record.model_name);
        self.registry.schema_for(&model_name)?;
        record.model_name = model_name.clone();

        let counter = self.next_ids.entry(model_name.clone()).or_insert(0);
        match record.id.as_deref().map(str::parse::<u64>) {
            None => {
                *counter += 1;
                record.id = Some(counter.to_string());
            }
            Some(Ok(explicit)) => *counter = (*counter).max(explicit),
            Some(Err(_)) => {}
        }

        self.link_inverses(&record)?;
        debug!(model = %model_name, id = ?record.id, "created fixture");

        self.records
            .entry(model_name)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    /// Builds a record with `factory`, stores it, then runs the factory's
    /// after-create hook.
    pub fn create_from<F: Factory + ?Sized>(&mut self, factory: &F) -> TestkitResult<Record> {
        let record = self.create(factory.build())?;
        factory.after_create(&record, self)?;
        // The hook may have added to the record's to-many relationships.
        Ok(self
            .find(&record.model_name, record.id.as_deref().unwrap_or_default())
            .cloned()
            .unwrap_or(record))
    }

    pub fn find(&self, model_name: &str, id: &str) -> Option<&Record> {
        self.all(model_name)
            .iter()
            .find(|r| r.id.as_deref() == Some(id))
    }

    pub fn all(&self, model_name: &str) -> &[Record] {
        self.records
            .get(&normalize_model_name(model_name))
            .map_or(&[], Vec::as_slice)
    }

    /// `{"transaction": {...}}` for one stored record.
    pub fn payload_for_one(&self, model_name: &str, id: &str) -> TestkitResult<Value> {
        let record = self
            .find(model_name, id)
            .ok_or_else(|| TestkitError::NotFound {
                model: model_name.to_string(),
                id: id.to_string(),
            })?;
        let mut root = Map::new();
        root.insert(
            self.serializer
                .keys()
                .payload_key_from_model_name(&record.model_name),
            Value::Object(self.render(record)?),
        );
        Ok(Value::Object(root))
    }

    /// `{"transactions": [...]}` for every stored record of a model.
    pub fn payload_for_all(&self, model_name: &str) -> TestkitResult<Value> {
        let model_name = normalize_model_name(model_name);
        self.registry.schema_for(&model_name)?;
        let resources = self
            .all(&model_name)
            .iter()
            .map(|r| self.render(r).map(Value::Object))
            .collect::<TestkitResult<Vec<_>>>()?;

        let key = pluralize(&self.serializer.keys().payload_key_from_model_name(&model_name));
        let mut root = Map::new();
        root.insert(key, Value::Array(resources));
        Ok(Value::Object(root))
    }

    /// Renders a record the way the server sends it: the client-side
    /// serialization plus `_ids` arrays for the to-many relationships the
    /// record holds.
    fn render(&self, record: &Record) -> TestkitResult<Map<String, Value>> {
        let schema = self.registry.schema_for(&record.model_name)?;
        let keys = self.serializer.keys();
        let mut json = self.serializer.serialize(schema, record, true);
        for relationship in schema.relationships() {
            let held = record.relationships.get(&relationship.name);
            let Some(RelationshipValue::Many(targets)) = held else {
                continue;
            };
            let ids = targets
                .iter()
                .map(|target| Value::String(target.id.clone()))
                .collect();
            json.insert(
                keys.key_for_relationship(&relationship.name, Some(relationship.kind)),
                Value::Array(ids),
            );
        }
        Ok(json)
    }

    fn link_inverses(&mut self, record: &Record) -> TestkitResult<()> {
        let schema = self.registry.schema_for(&record.model_name)?;
        let Some(id) = record.id.clone() else {
            return Ok(());
        };

        for relationship in schema.relationships() {
            if relationship.kind != RelationshipKind::BelongsTo
                || relationship.inverse == Inverse::Disabled
            {
                continue;
            }
            let Some(target) = record.belongs_to(&relationship.name) else {
                continue;
            };
            let Ok(target_schema) = self.registry.schema_for(&target.model_name) else {
                continue;
            };
            let inverse = target_schema.relationships().find(|r| {
                r.kind == RelationshipKind::HasMany
                    && normalize_model_name(&r.target) == record.model_name
                    && r.inverse.accepts(&relationship.name)
                    && relationship.inverse.accepts(&r.name)
            });
            let Some(inverse) = inverse else {
                continue;
            };

            let target_model = normalize_model_name(&target.model_name);
            let owner = self
                .records
                .get_mut(&target_model)
                .and_then(|records| {
                    records
                        .iter_mut()
                        .find(|r| r.id.as_deref() == Some(target.id.as_str()))
                });
            if let Some(owner) = owner {
                let entry = owner
                    .relationships
                    .entry(inverse.name.clone())
                    .or_insert_with(|| RelationshipValue::Many(Vec::new()));
                if let RelationshipValue::Many(targets) = entry {
                    targets.push(ResourceIdentifier::new(id.clone(), record.model_name.clone()));
                }
            }
        }
        Ok(())
    }
}
