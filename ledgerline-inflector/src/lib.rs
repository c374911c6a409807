//! String inflection for Ledgerline.
//!
//! Two families of transforms live here:
//! - casing conversions ([`camelize`], [`decamelize`], [`underscore`],
//!   [`dasherize`], [`classify`], [`capitalize`]) used to translate between
//!   camelCase model identifiers and snake_case wire keys
//! - English number inflection ([`pluralize`], [`singularize`]) driven by an
//!   [`Inflector`] rule table with irregular and uncountable exceptions
//!
//! Everything is deterministic and free of I/O. The free functions use a
//! process-wide default [`Inflector`]; build your own when custom rules are
//! needed.

mod case;
mod inflector;
mod rules;

pub use case::{camelize, capitalize, classify, dasherize, decamelize, underscore};
pub use inflector::Inflector;

use std::sync::LazyLock;

/// Result type for inflector configuration.
pub type InflectorResult<T> = Result<T, InflectorError>;

/// Errors raised while registering custom inflection rules.
#[derive(Debug, thiserror::Error)]
pub enum InflectorError {
    #[error("invalid inflection rule {pattern:?}: {source}")]
    InvalidRule {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

static DEFAULT_INFLECTOR: LazyLock<Inflector> = LazyLock::new(Inflector::default);

/// Pluralizes `word` with the default rules (`super_user` → `super_users`).
pub fn pluralize(word: &str) -> String {
    DEFAULT_INFLECTOR.pluralize(word)
}

/// Singularizes `word` with the default rules (`transaction_events` → `transaction_event`).
pub fn singularize(word: &str) -> String {
    DEFAULT_INFLECTOR.singularize(word)
}
