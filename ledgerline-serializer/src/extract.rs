use crate::KeyTranscoder;
use ledgerline_model::ModelSchema;
use serde_json::{Map, Value};
use tracing::debug;

/// Rewrites a wire resource so each relationship sits under its canonical key.
pub trait RelationshipExtractor: Send + Sync {
    fn extract(
        &self,
        schema: &ModelSchema,
        hash: &Map<String, Value>,
        keys: &dyn KeyTranscoder,
    ) -> Map<String, Value>;
}

/// Accepts the relationship encodings the API is known to send and folds them
/// into the canonical key from [`KeyTranscoder::key_for_relationship`]:
///
/// | wire shape                                   | result                          |
/// |----------------------------------------------|---------------------------------|
/// | `post_id: 1` / `post_ids: [1]`               | unchanged                       |
/// | `post: 1` / `posts: [1]`                     | moved to `post_id` / `post_ids` |
/// | `post: {id, type}` (polymorphic)             | moved to `post_id`, `post_type` dropped |
/// | `post_id: 1, post_type: "Post"` (polymorphic)| `post_id: {id: 1, type: "Post"}`|
///
/// Relationships are visited in declaration order. Consumed keys are removed,
/// so each relationship ends up under exactly one key.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalRelationships;

fn has_value(hash: &Map<String, Value>, key: &str) -> bool {
    hash.get(key).is_some_and(|v| !v.is_null())
}

impl RelationshipExtractor for CanonicalRelationships {
    fn extract(
        &self,
        schema: &ModelSchema,
        hash: &Map<String, Value>,
        keys: &dyn KeyTranscoder,
    ) -> Map<String, Value> {
        let mut out = hash.clone();

        for relationship in schema.relationships() {
            let name = relationship.name.as_str();
            let key = keys.key_for_relationship(name, Some(relationship.kind));
            let id_less_key = keys.key_for_id_less_relationship(name, relationship.kind);

            // Preferred polymorphic shape: `{id, type}` embedded under the bare name.
            if relationship.polymorphic {
                let plain_key = keys.key_for_relationship(name, None);
                if plain_key != key && matches!(out.get(&plain_key), Some(Value::Object(_))) {
                    if let Some(embedded) = out.remove(&plain_key) {
                        out.insert(key, embedded);
                    }
                    out.remove(&id_less_key);
                    out.remove(&keys.key_for_polymorphic_type(name));
                    continue;
                }
            }

            if id_less_key != key && has_value(&out, &id_less_key) {
                let fallback = out.remove(&id_less_key).unwrap_or(Value::Null);
                if has_value(&out, &key) {
                    debug!(
                        model = %schema.model_name,
                        relationship = name,
                        "dropping {id_less_key:?}: canonical key {key:?} already present"
                    );
                } else {
                    out.insert(key.clone(), fallback);
                }
            }

            if !relationship.polymorphic {
                continue;
            }

            // Flattened polymorphic shape: `<name>_id` next to `<name>_type`.
            let type_key = keys.key_for_polymorphic_type(name);
            let flattened_id = matches!(
                out.get(&key),
                Some(Value::String(_) | Value::Number(_) | Value::Bool(_))
            );
            if flattened_id && has_value(&out, &type_key) {
                let id = out.remove(&key).unwrap_or(Value::Null);
                let type_tag = out.remove(&type_key).unwrap_or(Value::Null);
                let mut identifier = Map::new();
                identifier.insert("id".to_string(), id);
                identifier.insert("type".to_string(), type_tag);
                out.insert(key, Value::Object(identifier));
            }
        }

        out
    }
}
