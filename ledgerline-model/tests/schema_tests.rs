use ledgerline_model::models::{
    TRANSACTION, TRANSACTION_EVENT, domain_registry, transaction_event_schema, transaction_schema,
};
use ledgerline_model::{
    AttributeDescriptor, AttributeType, Inverse, ModelError, ModelRegistry, ModelSchema,
    RelationshipDescriptor, RelationshipKind, normalize_model_name,
};
use pretty_assertions::assert_eq;

// ── RelationshipKind ─────────────────────────────────────────────

#[test]
fn relationship_kind_display() {
    assert_eq!(RelationshipKind::BelongsTo.to_string(), "belongsTo");
    assert_eq!(RelationshipKind::HasMany.to_string(), "hasMany");
}

#[test]
fn relationship_kind_parses_common_spellings() {
    assert_eq!("belongsTo".parse::<RelationshipKind>().unwrap(), RelationshipKind::BelongsTo);
    assert_eq!("belongs-to".parse::<RelationshipKind>().unwrap(), RelationshipKind::BelongsTo);
    assert_eq!("has_many".parse::<RelationshipKind>().unwrap(), RelationshipKind::HasMany);
}

#[test]
fn relationship_kind_rejects_unknown() {
    let err = "hasOne".parse::<RelationshipKind>().unwrap_err();
    assert!(matches!(err, ModelError::UnknownRelationshipKind(ref k) if k == "hasOne"));
}

#[test]
fn relationship_kind_serde_uses_camel_case() {
    let json = serde_json::to_string(&RelationshipKind::HasMany).unwrap();
    assert_eq!(json, "\"hasMany\"");
}

// ── Descriptors ──────────────────────────────────────────────────

#[test]
fn belongs_to_defaults() {
    let r = RelationshipDescriptor::belongs_to("transaction", "transaction");
    assert_eq!(r.kind, RelationshipKind::BelongsTo);
    assert!(!r.polymorphic);
    assert!(r.is_async);
    assert_eq!(r.inverse, Inverse::Inferred);
}

#[test]
fn descriptor_builders() {
    let r = RelationshipDescriptor::has_many("comments", "comment")
        .polymorphic()
        .synchronous()
        .inverse("commentable");
    assert!(r.polymorphic);
    assert!(!r.is_async);
    assert_eq!(r.inverse, Inverse::Named("commentable".into()));
}

#[test]
fn inverse_acceptance() {
    assert!(Inverse::Inferred.accepts("anything"));
    assert!(!Inverse::Disabled.accepts("anything"));
    assert!(Inverse::Named("commentable".into()).accepts("commentable"));
    assert!(!Inverse::Named("commentable".into()).accepts("owner"));
}

#[test]
fn inverse_serde_shapes() {
    let r = RelationshipDescriptor::belongs_to("owner", "user");
    assert!(!serde_json::to_string(&r).unwrap().contains("inverse"));

    let json = serde_json::to_value(r.clone().without_inverse()).unwrap();
    assert_eq!(json["inverse"], serde_json::json!("disabled"));

    let json = serde_json::to_value(r.inverse("pets")).unwrap();
    assert_eq!(json["inverse"], serde_json::json!({"named": "pets"}));
}

#[test]
fn descriptor_deserializes_with_defaults() {
    let json = r#"{"name": "owner", "kind": "belongsTo", "target": "user"}"#;
    let r: RelationshipDescriptor = serde_json::from_str(json).unwrap();
    assert_eq!(r, RelationshipDescriptor::belongs_to("owner", "user"));
}

#[test]
fn attribute_shorthands() {
    assert_eq!(AttributeDescriptor::string("status").attr_type, AttributeType::String);
    assert_eq!(AttributeDescriptor::boolean("success").attr_type, AttributeType::Boolean);
    assert_eq!(AttributeDescriptor::number("amount").attr_type, AttributeType::Number);
    assert_eq!(AttributeDescriptor::date("createdAt").attr_type, AttributeType::Date);
}

// ── Domain schemas ───────────────────────────────────────────────

#[test]
fn transaction_schema_shape() {
    let s = transaction_schema();
    assert_eq!(s.model_name, TRANSACTION);
    let attrs: Vec<&str> = s.attributes().map(|a| a.name.as_str()).collect();
    assert_eq!(attrs, vec!["cardNumber", "cardBrand"]);

    let events = s.relationship("transactionEvents").unwrap();
    assert_eq!(events.kind, RelationshipKind::HasMany);
    assert_eq!(events.target, TRANSACTION_EVENT);
    assert_eq!(events.inverse, Inverse::Disabled);
}

#[test]
fn transaction_event_schema_shape() {
    let s = transaction_event_schema();
    let attrs: Vec<&str> = s.attributes().map(|a| a.name.as_str()).collect();
    assert_eq!(attrs, vec!["success", "status", "eventType"]);
    assert_eq!(s.attribute("success").unwrap().attr_type, AttributeType::Boolean);

    let transaction = s.relationship("transaction").unwrap();
    assert_eq!(transaction.kind, RelationshipKind::BelongsTo);
    assert_eq!(transaction.target, TRANSACTION);
    assert!(transaction.is_async);
    assert_eq!(transaction.inverse, Inverse::Disabled);
}

#[test]
fn relationships_iterate_in_declaration_order() {
    let s = ModelSchema::new("post")
        .with_relationship(RelationshipDescriptor::belongs_to("author", "user"))
        .with_relationship(RelationshipDescriptor::has_many("comments", "comment"))
        .with_relationship(RelationshipDescriptor::belongs_to("category", "category"));
    let names: Vec<&str> = s.relationships().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["author", "comments", "category"]);
}

#[test]
fn schema_serde_roundtrip() {
    let original = transaction_event_schema();
    let json = serde_json::to_string(&original).unwrap();
    let parsed: ModelSchema = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

// ── Registry ─────────────────────────────────────────────────────

#[test]
fn normalize_model_name_dasherizes() {
    assert_eq!(normalize_model_name("transactionEvent"), "transaction-event");
    assert_eq!(normalize_model_name("transaction_event"), "transaction-event");
    assert_eq!(normalize_model_name("transaction-event"), "transaction-event");
}

#[test]
fn domain_registry_lookups_normalize_names() {
    let registry = domain_registry();
    assert_eq!(registry.model_names(), vec!["transaction", "transaction-event"]);
    assert!(registry.contains("transactionEvent"));
    assert_eq!(
        registry.schema_for("transaction_event").unwrap().model_name,
        TRANSACTION_EVENT
    );
}

#[test]
fn unknown_model_is_an_error() {
    let registry = ModelRegistry::new();
    let err = registry.schema_for("refund").unwrap_err();
    assert!(matches!(err, ModelError::UnknownModel(ref m) if m == "refund"));
    assert_eq!(err.to_string(), "no model registered for \"refund\"");
}

#[test]
fn register_replaces_existing_schema() {
    let mut registry = domain_registry();
    registry.register(ModelSchema::new("transaction"));
    assert!(registry.schema_for("transaction").unwrap().attributes.is_empty());
}
