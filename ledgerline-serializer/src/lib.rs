//! Wire-format transcoding for Ledgerline.
//!
//! The API speaks snake_case JSON with foreign-key style relationship fields
//! (`transaction_id`, `transaction_event_ids`); models use camelCase names and
//! resolved references. This crate translates between the two:
//!
//! - [`KeyTranscoder`]: attribute, relationship, link and root-key naming
//! - [`RelationshipExtractor`]: moves every relationship under its canonical
//!   wire key before extraction (fallback keys, polymorphic `{id, type}` shapes)
//! - [`LinkNormalizer`]: camelizes the keys of a resource's `links` object
//! - [`model_name_from_payload_key`]: payload root keys to model names
//! - [`RestSerializer`]: the normalize / serialize lifecycle tying them together
//!
//! Every transform builds a new JSON map from its input; nothing is mutated in place.

mod extract;
mod keys;
mod links;
mod names;
mod serializer;

pub use extract::{CanonicalRelationships, RelationshipExtractor};
pub use keys::{KeyTranscoder, SnakeCaseKeys};
pub use links::{CamelCaseLinks, LinkNormalizer};
pub use names::{model_name_from_payload_key, polymorphic_type_tag};
pub use serializer::{Document, PrimaryData, RestSerializer};

/// Result type for serializer operations.
pub type SerializerResult<T> = Result<T, SerializerError>;

/// Errors raised while normalizing a payload.
#[derive(Debug, thiserror::Error)]
pub enum SerializerError {
    #[error("{model} payload is missing an id")]
    MissingId { model: String },

    #[error("expected a JSON object for {0:?}")]
    ExpectedObject(String),

    #[error("invalid value for relationship {relationship:?}: {value}")]
    InvalidRelationship { relationship: String, value: String },
}
