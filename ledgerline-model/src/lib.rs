//! Model schemas for Ledgerline.
//!
//! Defines the static description of every model the data layer knows about:
//! - [`ModelSchema`]: a model's attributes and relationships, in declaration order
//! - [`RelationshipDescriptor`]: name, [`RelationshipKind`], target model, polymorphism
//! - [`ModelRegistry`]: schemas keyed by normalized model name
//! - [`Record`]: a normalized resource: camelCase attributes plus resolved references
//!
//! The two domain models, `transaction` and `transaction-event`, live in
//! [`models`]. Schemas are immutable once registered; records are plain values
//! produced by the serializer for each response.

pub mod models;
mod record;
mod registry;
mod schema;
mod view;

pub use record::{Record, RelationshipValue, ResourceIdentifier};
pub use registry::{ModelRegistry, normalize_model_name};
pub use schema::{
    AttributeDescriptor, AttributeType, Inverse, ModelSchema, RelationshipDescriptor,
    RelationshipKind,
};
pub use view::TransactionEventView;

/// Result type for model lookups.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by schema lookups.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("no model registered for {0:?}")]
    UnknownModel(String),

    #[error("unknown relationship kind: {0:?}")]
    UnknownRelationshipKind(String),
}
