//! Commands behind the `ledgerline` binary.
//!
//! Each command returns JSON so the binary only has to print it.

use anyhow::{Context, Result};
use ledgerline_adapter::{AdapterConfig, Conventions, PathResolver, RestAdapter};
use ledgerline_model::models::domain_registry;
use ledgerline_model::RelationshipKind;
use ledgerline_serializer::{Document, PrimaryData, RestSerializer};
use serde::Serialize;
use serde_json::{Value, json};
use std::path::Path;
use tracing::info;

/// Every wire key derived from one camelCase name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyReport {
    pub attribute: String,
    pub relationship: String,
    pub link: String,
    pub payload_key: String,
    pub polymorphic_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_less: Option<String>,
}

/// The collection path for a model name.
pub fn path_for(model_name: &str) -> String {
    Conventions::default().paths.path_for_type(model_name)
}

/// The wire keys for `name`; relationship keys follow `kind` when given.
pub fn keys_for(name: &str, kind: Option<RelationshipKind>) -> KeyReport {
    let conventions = Conventions::default();
    let keys = conventions.keys.as_ref();
    KeyReport {
        attribute: keys.key_for_attribute(name),
        relationship: keys.key_for_relationship(name, kind),
        link: keys.key_for_link(name),
        payload_key: keys.payload_key_from_model_name(name),
        polymorphic_type: keys.key_for_polymorphic_type(name),
        id_less: kind.map(|kind| keys.key_for_id_less_relationship(name, kind)),
    }
}

/// The model name a payload root key refers to.
pub fn model_name_for(payload_key: &str) -> String {
    Conventions::default()
        .keys
        .model_name_from_payload_key(payload_key)
}

/// Normalizes a wire payload whose primary data is `model_name`.
pub fn normalize_payload(model_name: &str, payload: &Value) -> Result<Value> {
    let registry = domain_registry();
    let serializer = RestSerializer::default();
    let document = serializer
        .normalize_response(&registry, model_name, payload)
        .with_context(|| format!("failed to normalize {model_name} payload"))?;
    document_to_json(document)
}

/// Reads a payload from `file`, or from stdin when no file is given.
pub fn read_payload(file: Option<&Path>) -> Result<Value> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?,
    };
    serde_json::from_str(&raw).context("payload is not valid JSON")
}

/// Fetches one record, or the whole collection when `id` is `None`.
pub async fn fetch(config: AdapterConfig, model_name: &str, id: Option<&str>) -> Result<Value> {
    let adapter = RestAdapter::new(config, domain_registry(), Conventions::default())
        .context("failed to build adapter")?;
    info!(url = %adapter.build_url(model_name, id), "fetching");

    match id {
        Some(id) => {
            let record = adapter
                .find_record(model_name, id)
                .await
                .with_context(|| format!("failed to fetch {model_name} {id}"))?;
            Ok(serde_json::to_value(record)?)
        }
        None => {
            let document = adapter
                .find_all(model_name)
                .await
                .with_context(|| format!("failed to fetch {model_name} collection"))?;
            document_to_json(document)
        }
    }
}

/// Resolves the adapter config: the file when given, then host and namespace
/// overrides.
pub fn load_config(
    file: Option<&Path>,
    host: Option<String>,
    namespace: Option<String>,
) -> Result<AdapterConfig> {
    let mut config = match file {
        Some(path) => AdapterConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AdapterConfig::default(),
    };
    if let Some(host) = host {
        config.host = host;
    }
    if namespace.is_some() {
        config.namespace = namespace;
    }
    Ok(config)
}

fn document_to_json(document: Document) -> Result<Value> {
    let data = match document.data {
        PrimaryData::Single(record) => serde_json::to_value(record)?,
        PrimaryData::Many(records) => serde_json::to_value(records)?,
        PrimaryData::Empty => Value::Null,
    };
    Ok(json!({
        "data": data,
        "included": document.included,
        "meta": document.meta,
    }))
}
