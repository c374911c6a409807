use crate::{AdapterError, AdapterResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Where and how the adapter reaches the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Scheme, host and port (e.g. `https://payments.example.com`).
    pub host: String,
    /// Path prefix placed before every collection path (e.g. `api/v1`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Extra headers sent with every request.
    pub headers: BTreeMap<String, String>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:3000".to_string(),
            namespace: None,
            timeout_secs: 30,
            headers: BTreeMap::new(),
        }
    }
}

impl AdapterConfig {
    /// Loads a config from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> AdapterResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AdapterError::Config(format!("{}: {e}", path.display())))?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
