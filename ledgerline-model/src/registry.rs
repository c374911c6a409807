use crate::{ModelError, ModelResult, ModelSchema};
use ledgerline_inflector::dasherize;
use std::collections::HashMap;

/// Normalizes a model name to its canonical dasherized form
/// (`transactionEvent` and `transaction_event` both become `transaction-event`).
pub fn normalize_model_name(name: &str) -> String {
    dasherize(name)
}

/// Schemas for every known model, keyed by normalized model name.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    schemas: HashMap<String, ModelSchema>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema, replacing any schema with the same normalized name.
    pub fn register(&mut self, schema: ModelSchema) {
        self.schemas
            .insert(normalize_model_name(&schema.model_name), schema);
    }

    #[must_use]
    pub fn with(mut self, schema: ModelSchema) -> Self {
        self.register(schema);
        self
    }

    pub fn contains(&self, model_name: &str) -> bool {
        self.schemas.contains_key(&normalize_model_name(model_name))
    }

    pub fn schema_for(&self, model_name: &str) -> ModelResult<&ModelSchema> {
        self.schemas
            .get(&normalize_model_name(model_name))
            .ok_or_else(|| ModelError::UnknownModel(model_name.to_string()))
    }

    /// Registered model names, sorted.
    pub fn model_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
