//! The domain models served by the payments API.

use crate::{AttributeDescriptor, ModelRegistry, ModelSchema, RelationshipDescriptor};

pub const TRANSACTION: &str = "transaction";
pub const TRANSACTION_EVENT: &str = "transaction-event";

/// A card transaction and the events recorded against it.
pub fn transaction_schema() -> ModelSchema {
    ModelSchema::new(TRANSACTION)
        .with_attribute(AttributeDescriptor::string("cardNumber"))
        .with_attribute(AttributeDescriptor::string("cardBrand"))
        .with_relationship(
            RelationshipDescriptor::has_many("transactionEvents", TRANSACTION_EVENT)
                .without_inverse(),
        )
}

/// A processing event (authorization, capture, refund...) on a transaction.
pub fn transaction_event_schema() -> ModelSchema {
    ModelSchema::new(TRANSACTION_EVENT)
        .with_attribute(AttributeDescriptor::boolean("success"))
        .with_attribute(AttributeDescriptor::string("status"))
        .with_attribute(AttributeDescriptor::string("eventType"))
        .with_relationship(
            RelationshipDescriptor::belongs_to("transaction", TRANSACTION).without_inverse(),
        )
}

/// A registry holding every domain model.
pub fn domain_registry() -> ModelRegistry {
    ModelRegistry::new()
        .with(transaction_schema())
        .with(transaction_event_schema())
}
