use ledgerline_model::RelationshipKind;
use ledgerline_serializer::{
    KeyTranscoder, SnakeCaseKeys, model_name_from_payload_key, polymorphic_type_tag,
};

// ── Attributes ───────────────────────────────────────────────────

#[test]
fn attribute_keys_are_decamelized() {
    assert_eq!(SnakeCaseKeys.key_for_attribute("cardNumber"), "card_number");
    assert_eq!(SnakeCaseKeys.key_for_attribute("eventType"), "event_type");
    assert_eq!(SnakeCaseKeys.key_for_attribute("status"), "status");
}

#[test]
fn attribute_keys_are_not_underscored() {
    // decamelize only: dashes survive
    assert_eq!(SnakeCaseKeys.key_for_attribute("x-request-id"), "x-request-id");
}

// ── Relationships ────────────────────────────────────────────────

#[test]
fn belongs_to_key_appends_id() {
    let key = SnakeCaseKeys.key_for_relationship("transaction", Some(RelationshipKind::BelongsTo));
    assert_eq!(key, "transaction_id");
    let key =
        SnakeCaseKeys.key_for_relationship("paymentSource", Some(RelationshipKind::BelongsTo));
    assert_eq!(key, "payment_source_id");
}

#[test]
fn has_many_key_singularizes_and_appends_ids() {
    let key =
        SnakeCaseKeys.key_for_relationship("transactionEvent", Some(RelationshipKind::HasMany));
    assert_eq!(key, "transaction_event_ids");
    let key =
        SnakeCaseKeys.key_for_relationship("transactionEvents", Some(RelationshipKind::HasMany));
    assert_eq!(key, "transaction_event_ids");
    let key = SnakeCaseKeys.key_for_relationship("people", Some(RelationshipKind::HasMany));
    assert_eq!(key, "person_ids");
}

#[test]
fn relationship_key_without_kind_is_decamelized_name() {
    assert_eq!(SnakeCaseKeys.key_for_relationship("paymentSource", None), "payment_source");
}

#[test]
fn polymorphic_type_key() {
    assert_eq!(SnakeCaseKeys.key_for_polymorphic_type("transaction"), "transaction_type");
}

#[test]
fn id_less_relationship_keys() {
    assert_eq!(
        SnakeCaseKeys.key_for_id_less_relationship("transactionEvents", RelationshipKind::HasMany),
        "transaction_events"
    );
    assert_eq!(
        SnakeCaseKeys.key_for_id_less_relationship("transactionEvent", RelationshipKind::HasMany),
        "transaction_events"
    );
    assert_eq!(
        SnakeCaseKeys.key_for_id_less_relationship("transaction", RelationshipKind::BelongsTo),
        "transaction"
    );
}

// ── Links and roots ──────────────────────────────────────────────

#[test]
fn link_keys_are_camelized() {
    assert_eq!(SnakeCaseKeys.key_for_link("flagged_comments"), "flaggedComments");
    assert_eq!(SnakeCaseKeys.key_for_link("events"), "events");
}

#[test]
fn payload_root_keys_are_underscored() {
    assert_eq!(SnakeCaseKeys.payload_key_from_model_name("transaction-event"), "transaction_event");
    assert_eq!(SnakeCaseKeys.payload_key_from_model_name("superUser"), "super_user");
    assert_eq!(SnakeCaseKeys.payload_key_from_model_name("transaction"), "transaction");
}

// ── Model name codec ─────────────────────────────────────────────

#[test]
fn model_name_from_plural_root() {
    assert_eq!(model_name_from_payload_key("transaction_events"), "transaction-event");
    assert_eq!(model_name_from_payload_key("transactions"), "transaction");
    assert_eq!(model_name_from_payload_key("transaction"), "transaction");
}

#[test]
fn model_name_from_namespaced_key() {
    assert_eq!(model_name_from_payload_key("Namespace::Thing"), "namespace/thing");
    assert_eq!(model_name_from_payload_key("Admin::SuperUsers"), "admin/super-user");
}

#[test]
fn model_name_from_class_style_type_tag() {
    assert_eq!(model_name_from_payload_key("TransactionEvent"), "transaction-event");
    assert_eq!(SnakeCaseKeys.model_name_from_payload_key("Transaction"), "transaction");
}

#[test]
fn polymorphic_type_tag_is_class_style() {
    assert_eq!(polymorphic_type_tag("transaction-event"), "TransactionEvent");
    assert_eq!(polymorphic_type_tag("admin/super-user"), "Admin::SuperUser");
}
