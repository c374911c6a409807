use ledgerline_inflector::{classify, singularize};
use ledgerline_model::normalize_model_name;

/// Converts a payload root key or type tag into a normalized model name.
///
/// A Ruby-style namespace separator becomes a path separator, the result is
/// singularized and then normalized: `transaction_events` → `transaction-event`,
/// `Admin::SuperUser` → `admin/super-user`.
pub fn model_name_from_payload_key(key: &str) -> String {
    let converted = key.replacen("::", "/", 1);
    normalize_model_name(&singularize(&converted))
}

/// Renders a model name as the class-style type tag the API expects
/// (`admin/super-user` → `Admin::SuperUser`).
pub fn polymorphic_type_tag(model_name: &str) -> String {
    classify(model_name).replace('/', "::")
}
