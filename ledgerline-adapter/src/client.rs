//! Async REST client.
//!
//! One request per call: no retries, no caching, no batching.

use crate::{AdapterConfig, AdapterError, AdapterResult, Conventions};
use ledgerline_model::{ModelRegistry, Record};
use ledgerline_serializer::{Document, PrimaryData, RestSerializer};
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, warn};

/// Reads and writes records over the API.
pub struct RestAdapter {
    config: AdapterConfig,
    conventions: Conventions,
    serializer: RestSerializer,
    registry: ModelRegistry,
    client: Client,
}

impl std::fmt::Debug for RestAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestAdapter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RestAdapter {
    /// Creates an adapter for the models in `registry`.
    pub fn new(
        config: AdapterConfig,
        registry: ModelRegistry,
        conventions: Conventions,
    ) -> AdapterResult<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AdapterError::Config(format!("header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| AdapterError::Config(format!("header {name}: {e}")))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            serializer: conventions.serializer(),
            config,
            conventions,
            registry,
            client,
        })
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn serializer(&self) -> &RestSerializer {
        &self.serializer
    }

    pub fn path_for_type(&self, model_name: &str) -> String {
        self.conventions.paths.path_for_type(model_name)
    }

    /// `host[/namespace]/<path for model>[/id]`
    pub fn build_url(&self, model_name: &str, id: Option<&str>) -> String {
        let mut url = self.config.host.trim_end_matches('/').to_string();
        if let Some(namespace) = self.config.namespace.as_deref() {
            let namespace = namespace.trim_matches('/');
            if !namespace.is_empty() {
                url.push('/');
                url.push_str(namespace);
            }
        }
        url.push('/');
        url.push_str(&self.path_for_type(model_name));
        if let Some(id) = id {
            url.push('/');
            url.push_str(&urlencoding::encode(id));
        }
        url
    }

    // ── Reads ────────────────────────────────────────────────────

    /// Fetches a single record by id.
    pub async fn find_record(&self, model_name: &str, id: &str) -> AdapterResult<Record> {
        let payload = self
            .request(Method::GET, &self.build_url(model_name, Some(id)), None, &[])
            .await?;
        let document = self
            .serializer
            .normalize_response(&self.registry, model_name, &payload)?;

        match document.data {
            PrimaryData::Single(record) => Ok(record),
            PrimaryData::Many(records) => records
                .into_iter()
                .find(|r| r.id.as_deref() == Some(id))
                .ok_or(AdapterError::NotFound),
            PrimaryData::Empty => Err(AdapterError::NotFound),
        }
    }

    /// Fetches the whole collection for a model.
    pub async fn find_all(&self, model_name: &str) -> AdapterResult<Document> {
        self.query(model_name, &[]).await
    }

    /// Fetches a collection filtered by query-string parameters.
    pub async fn query(
        &self,
        model_name: &str,
        params: &[(&str, &str)],
    ) -> AdapterResult<Document> {
        let payload = self
            .request(Method::GET, &self.build_url(model_name, None), None, params)
            .await?;
        Ok(self
            .serializer
            .normalize_response(&self.registry, model_name, &payload)?)
    }

    // ── Writes ───────────────────────────────────────────────────

    /// POSTs a new record; returns the server's copy, or the input when the
    /// server answers without a body.
    pub async fn create_record(&self, record: &Record) -> AdapterResult<Record> {
        let body = self.payload_for(record)?;
        let url = self.build_url(&record.model_name, None);
        let payload = self.request(Method::POST, &url, Some(body), &[]).await?;
        self.saved_record(record, &payload)
    }

    /// PUTs an existing record; returns the server's copy, or the input when
    /// the server answers without a body.
    pub async fn update_record(&self, record: &Record) -> AdapterResult<Record> {
        let id = record.id.as_deref().ok_or_else(|| AdapterError::MissingId {
            model: record.model_name.clone(),
        })?;
        let body = self.payload_for(record)?;
        let url = self.build_url(&record.model_name, Some(id));
        let payload = self.request(Method::PUT, &url, Some(body), &[]).await?;
        self.saved_record(record, &payload)
    }

    /// DELETEs a record by id.
    pub async fn delete_record(&self, model_name: &str, id: &str) -> AdapterResult<()> {
        self.request(Method::DELETE, &self.build_url(model_name, Some(id)), None, &[])
            .await?;
        Ok(())
    }

    fn payload_for(&self, record: &Record) -> AdapterResult<Value> {
        let schema = self.registry.schema_for(&record.model_name)?;
        Ok(Value::Object(
            self.serializer.serialize_into_hash(schema, record, true),
        ))
    }

    fn saved_record(&self, sent: &Record, payload: &Value) -> AdapterResult<Record> {
        let document = self
            .serializer
            .normalize_response(&self.registry, &sent.model_name, payload)?;
        match document.data {
            PrimaryData::Single(record) => Ok(record),
            _ => Ok(sent.clone()),
        }
    }

    async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
        params: &[(&str, &str)],
    ) -> AdapterResult<Value> {
        debug!(%method, url, "sending request");

        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json");
        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let text = response.text().await?;

        let success = (200..300).contains(&status);
        if !success {
            warn!(status, url, "request failed");
        }

        let payload = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(payload) => payload,
                Err(e) if success => return Err(e.into()),
                Err(_) => Value::String(text),
            }
        };

        self.conventions
            .responses
            .handle_response(status, &headers, payload)
    }
}
