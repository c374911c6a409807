//! REST adapter for Ledgerline.
//!
//! Maps model names to endpoint paths, classifies responses (422 validation
//! failures become [`AdapterError::Invalid`]) and drives a thin async HTTP
//! client whose naming behaviour is injected through [`Conventions`].
//!
//! # Example
//!
//! ```
//! use ledgerline_adapter::{AdapterConfig, Conventions, RestAdapter};
//! use ledgerline_model::models::domain_registry;
//!
//! let config = AdapterConfig {
//!     namespace: Some("api/v1".to_string()),
//!     ..Default::default()
//! };
//! let adapter = RestAdapter::new(config, domain_registry(), Conventions::default()).unwrap();
//! assert_eq!(
//!     adapter.build_url("transaction-event", Some("9")),
//!     "http://localhost:3000/api/v1/transaction_events/9"
//! );
//! ```

mod client;
mod config;
mod conventions;
mod error;
mod path;
mod response;

pub use client::RestAdapter;
pub use config::AdapterConfig;
pub use conventions::Conventions;
pub use error::{AdapterError, AdapterResult};
pub use path::{PathResolver, UnderscoredPaths};
pub use response::{
    DefaultResponseHandler, ResponseHandler, ValidationAwareHandler, ValidationError,
    errors_hash_to_array, is_invalid,
};
