//! Test fixtures for Ledgerline.
//!
//! A [`FixtureStore`] holds records in memory, hands out sequential ids and
//! renders them as the snake_case payloads the API would send. [`Factory`]
//! implementations build records with default attributes and may create
//! dependent records once their own record exists.
//!
//! ```
//! use ledgerline_testkit::{FixtureStore, TransactionFactory};
//!
//! let mut store = FixtureStore::default();
//! let transaction = store.create_from(&TransactionFactory).unwrap();
//! assert_eq!(transaction.id.as_deref(), Some("1"));
//! assert_eq!(store.all("transaction-event").len(), 1);
//! ```

mod factory;
mod store;

pub use factory::{Factory, TransactionFactory};
pub use store::FixtureStore;

use ledgerline_model::ModelError;

/// Result type for fixture operations.
pub type TestkitResult<T> = Result<T, TestkitError>;

#[derive(Debug, thiserror::Error)]
pub enum TestkitError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("no {model} fixture with id {id:?}")]
    NotFound { model: String, id: String },
}
