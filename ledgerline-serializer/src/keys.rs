use crate::names::model_name_from_payload_key;
use ledgerline_inflector::{camelize, decamelize, pluralize, singularize, underscore};
use ledgerline_model::RelationshipKind;

/// Maps model-side names to wire keys and back.
///
/// Implementations must be pure: the same input always yields the same key.
pub trait KeyTranscoder: Send + Sync {
    /// Wire key for an attribute (`cardNumber` → `card_number`).
    fn key_for_attribute(&self, attribute: &str) -> String;

    /// Wire key for a relationship. `None` yields the bare relationship key,
    /// which is also the prefix of the polymorphic type key.
    fn key_for_relationship(&self, relationship: &str, kind: Option<RelationshipKind>) -> String;

    /// Model-side key for a wire link name (`flagged_comments` → `flaggedComments`).
    fn key_for_link(&self, link: &str) -> String;

    /// JSON root key for a single record of `model_name`.
    fn payload_key_from_model_name(&self, model_name: &str) -> String;

    /// Key under which a relationship may arrive without its `_id`/`_ids` suffix.
    fn key_for_id_less_relationship(&self, relationship: &str, kind: RelationshipKind) -> String;

    /// Sibling key carrying a polymorphic relationship's type tag.
    fn key_for_polymorphic_type(&self, relationship: &str) -> String {
        format!("{}_type", self.key_for_relationship(relationship, None))
    }

    /// Model name for a payload root key or polymorphic type tag.
    fn model_name_from_payload_key(&self, key: &str) -> String {
        model_name_from_payload_key(key)
    }
}

/// snake_case wire keys with `_id` / `_ids` relationship suffixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeCaseKeys;

impl KeyTranscoder for SnakeCaseKeys {
    fn key_for_attribute(&self, attribute: &str) -> String {
        decamelize(attribute)
    }

    fn key_for_relationship(&self, relationship: &str, kind: Option<RelationshipKind>) -> String {
        let key = decamelize(relationship);
        match kind {
            Some(RelationshipKind::BelongsTo) => format!("{key}_id"),
            Some(RelationshipKind::HasMany) => format!("{}_ids", singularize(&key)),
            None => key,
        }
    }

    fn key_for_link(&self, link: &str) -> String {
        camelize(link)
    }

    fn payload_key_from_model_name(&self, model_name: &str) -> String {
        underscore(&decamelize(model_name))
    }

    fn key_for_id_less_relationship(&self, relationship: &str, kind: RelationshipKind) -> String {
        match kind {
            RelationshipKind::HasMany => underscore(&pluralize(relationship)),
            RelationshipKind::BelongsTo => underscore(&singularize(relationship)),
        }
    }
}
