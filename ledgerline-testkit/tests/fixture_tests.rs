use ledgerline_model::models::{domain_registry, transaction_event_schema};
use ledgerline_model::{
    ModelRegistry, ModelSchema, Record, RelationshipDescriptor, ResourceIdentifier,
    TransactionEventView,
};
use ledgerline_serializer::{PrimaryData, RestSerializer};
use ledgerline_testkit::{Factory, FixtureStore, TestkitError, TransactionFactory};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Store ────────────────────────────────────────────────────────

#[test]
fn ids_are_sequential_per_model() {
    let mut store = FixtureStore::default();
    let a = store.create(Record::new("transaction")).unwrap();
    let b = store.create(Record::new("transaction")).unwrap();
    let e = store.create(Record::new("transaction-event")).unwrap();

    assert_eq!(a.id.as_deref(), Some("1"));
    assert_eq!(b.id.as_deref(), Some("2"));
    assert_eq!(e.id.as_deref(), Some("1"));
}

#[test]
fn explicit_numeric_id_advances_counter() {
    let mut store = FixtureStore::default();
    store.create(Record::new("transaction").with_id("7")).unwrap();
    let next = store.create(Record::new("transaction")).unwrap();
    assert_eq!(next.id.as_deref(), Some("8"));
}

#[test]
fn model_names_are_normalized() {
    let mut store = FixtureStore::default();
    let event = store.create(Record::new("transactionEvent")).unwrap();
    assert_eq!(event.model_name, "transaction-event");
    assert_eq!(store.all("transaction_event").len(), 1);
}

#[test]
fn unknown_model_is_rejected() {
    let mut store = FixtureStore::default();
    let err = store.create(Record::new("refund")).unwrap_err();
    assert!(matches!(err, TestkitError::Model(_)));
}

#[test]
fn find_missing_returns_none() {
    let store = FixtureStore::default();
    assert!(store.find("transaction", "1").is_none());
    assert!(store.all("transaction").is_empty());
}

#[test]
fn payload_for_missing_record_is_not_found() {
    let store = FixtureStore::default();
    let err = store.payload_for_one("transaction", "3").unwrap_err();
    assert!(matches!(err, TestkitError::NotFound { .. }));
}

#[test]
fn store_without_inverse_leaves_owner_untouched() {
    let registry = ModelRegistry::new().with(transaction_event_schema());
    let mut store = FixtureStore::new(registry);
    let event = store
        .create(
            Record::new("transaction-event")
                .with_belongs_to("transaction", Some(ResourceIdentifier::new("1", "transaction"))),
        )
        .unwrap();
    assert_eq!(TransactionEventView::new(&event).transaction_id.as_deref(), Some("1"));
}

// ── Inverse linking ──────────────────────────────────────────────

fn post_registry(comments: RelationshipDescriptor, post: RelationshipDescriptor) -> ModelRegistry {
    ModelRegistry::new()
        .with(ModelSchema::new("post").with_relationship(comments))
        .with(ModelSchema::new("comment").with_relationship(post))
}

fn comment_on(post_id: &str) -> Record {
    Record::new("comment")
        .with_belongs_to("post", Some(ResourceIdentifier::new(post_id, "post")))
}

#[test]
fn inferred_inverse_appends_to_owner() {
    let mut store = FixtureStore::new(post_registry(
        RelationshipDescriptor::has_many("comments", "comment"),
        RelationshipDescriptor::belongs_to("post", "post"),
    ));
    store.create(Record::new("post")).unwrap();
    store.create(comment_on("1")).unwrap();

    assert_eq!(
        store.find("post", "1").unwrap().has_many("comments"),
        &[ResourceIdentifier::new("1", "comment")]
    );
    assert_eq!(
        store.payload_for_one("post", "1").unwrap(),
        json!({"post": {"id": "1", "comment_ids": ["1"]}})
    );
}

#[test]
fn named_inverse_must_match() {
    let mut store = FixtureStore::new(post_registry(
        RelationshipDescriptor::has_many("comments", "comment").inverse("article"),
        RelationshipDescriptor::belongs_to("post", "post"),
    ));
    store.create(Record::new("post")).unwrap();
    store.create(comment_on("1")).unwrap();

    assert!(store.find("post", "1").unwrap().has_many("comments").is_empty());
}

#[test]
fn disabled_inverse_on_either_side_skips_linking() {
    for (comments, post) in [
        (
            RelationshipDescriptor::has_many("comments", "comment").without_inverse(),
            RelationshipDescriptor::belongs_to("post", "post"),
        ),
        (
            RelationshipDescriptor::has_many("comments", "comment"),
            RelationshipDescriptor::belongs_to("post", "post").without_inverse(),
        ),
    ] {
        let mut store = FixtureStore::new(post_registry(comments, post));
        store.create(Record::new("post")).unwrap();
        store.create(comment_on("1")).unwrap();

        let post = store.find("post", "1").unwrap();
        assert!(post.relationships.is_empty());
        assert_eq!(
            store.payload_for_one("post", "1").unwrap(),
            json!({"post": {"id": "1"}})
        );
    }
}

// ── TransactionFactory ───────────────────────────────────────────

#[test]
fn transaction_factory_defaults() {
    let record = TransactionFactory.build();
    assert_eq!(record.model_name, "transaction");
    assert_eq!(record.get_str("cardNumber"), Some("411111******1111"));
    assert_eq!(record.get_str("cardBrand"), Some("visa"));
    assert!(record.id.is_none());
}

#[test]
fn after_create_adds_event_for_transaction() {
    let mut store = FixtureStore::default();
    let transaction = store.create_from(&TransactionFactory).unwrap();

    let events = store.all("transaction-event");
    assert_eq!(events.len(), 1);
    assert_eq!(
        TransactionEventView::new(&events[0]).transaction_id,
        transaction.id
    );
    // Both sides are declared without an inverse.
    assert!(transaction.has_many("transactionEvents").is_empty());
    assert!(transaction.relationships.is_empty());
}

#[test]
fn each_transaction_gets_its_own_event() {
    let mut store = FixtureStore::default();
    store.create_from(&TransactionFactory).unwrap();
    let second = store.create_from(&TransactionFactory).unwrap();

    assert_eq!(second.id.as_deref(), Some("2"));
    let events = store.all("transaction-event");
    assert_eq!(events.len(), 2);
    assert_eq!(
        TransactionEventView::new(&events[1]).transaction_id.as_deref(),
        Some("2")
    );
}

// ── Payloads ─────────────────────────────────────────────────────

#[test]
fn payload_for_one_uses_singular_root() {
    let mut store = FixtureStore::default();
    store.create_from(&TransactionFactory).unwrap();

    assert_eq!(
        store.payload_for_one("transaction", "1").unwrap(),
        json!({
            "transaction": {
                "id": "1",
                "card_number": "411111******1111",
                "card_brand": "visa"
            }
        })
    );
}

#[test]
fn payload_for_all_uses_plural_root() {
    let mut store = FixtureStore::default();
    store.create_from(&TransactionFactory).unwrap();

    assert_eq!(
        store.payload_for_all("transaction-event").unwrap(),
        json!({
            "transaction_events": [
                {"id": "1", "transaction_id": "1"}
            ]
        })
    );
}

#[test]
fn payload_for_all_of_empty_collection() {
    let store = FixtureStore::default();
    assert_eq!(
        store.payload_for_all("transaction").unwrap(),
        json!({"transactions": []})
    );
}

#[test]
fn payloads_normalize_back_to_stored_records() {
    let mut store = FixtureStore::default();
    let transaction = store.create_from(&TransactionFactory).unwrap();

    let document = RestSerializer::default()
        .normalize_response(
            &domain_registry(),
            "transaction",
            &store.payload_for_one("transaction", "1").unwrap(),
        )
        .unwrap();
    assert_eq!(document.data, PrimaryData::Single(transaction));
}
