//! Response classification.

use crate::{AdapterError, AdapterResult};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One failed validation: the offending wire field and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Turns a raw HTTP response into either its payload or an [`AdapterError`].
pub trait ResponseHandler: Send + Sync {
    fn handle_response(
        &self,
        status: u16,
        headers: &HeaderMap,
        payload: Value,
    ) -> AdapterResult<Value>;
}

/// Status-code based handling: 2xx passes the payload through untouched,
/// everything else maps to the matching [`AdapterError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResponseHandler;

impl ResponseHandler for DefaultResponseHandler {
    fn handle_response(
        &self,
        status: u16,
        _headers: &HeaderMap,
        payload: Value,
    ) -> AdapterResult<Value> {
        match status {
            200..=299 => Ok(payload),
            401 => Err(AdapterError::Unauthorized),
            403 => Err(AdapterError::Forbidden),
            404 => Err(AdapterError::NotFound),
            409 => Err(AdapterError::Conflict),
            500..=599 => Err(AdapterError::Server { status }),
            _ => Err(AdapterError::Status {
                status,
                body: match payload {
                    Value::String(text) => text,
                    other => other.to_string(),
                },
            }),
        }
    }
}

/// Whether a response is a validation failure (422 Unprocessable Entity).
pub fn is_invalid(status: u16, _headers: &HeaderMap, _payload: &Value) -> bool {
    status == 422
}

/// Reports 422 responses as [`AdapterError::Invalid`] carrying the flattened
/// `errors` member, and hands every other response to `fallback` unchanged.
#[derive(Debug, Clone, Default)]
pub struct ValidationAwareHandler<D = DefaultResponseHandler> {
    fallback: D,
}

impl<D: ResponseHandler> ValidationAwareHandler<D> {
    pub fn new(fallback: D) -> Self {
        Self { fallback }
    }
}

impl<D: ResponseHandler> ResponseHandler for ValidationAwareHandler<D> {
    fn handle_response(
        &self,
        status: u16,
        headers: &HeaderMap,
        payload: Value,
    ) -> AdapterResult<Value> {
        if is_invalid(status, headers, &payload) {
            let errors = errors_hash_to_array(payload.get("errors"))?;
            return Err(AdapterError::Invalid(errors));
        }
        self.fallback.handle_response(status, headers, payload)
    }
}

/// Flattens a validation `errors` member into an ordered list.
///
/// Two wire shapes are accepted:
/// - a map of field to message or messages:
///   `{"card_number": ["is invalid", "is too short"]}`
/// - a list of error objects with a JSON pointer source:
///   `[{"source": {"pointer": "/data/attributes/card_number"}, "detail": "is invalid"}]`
///
/// Errors pointing at the whole resource (`/data`, or no pointer) are
/// reported under the `base` field.
pub fn errors_hash_to_array(errors: Option<&Value>) -> AdapterResult<Vec<ValidationError>> {
    match errors {
        Some(Value::Object(fields)) => {
            let mut out = Vec::new();
            for (field, messages) in fields {
                match messages {
                    Value::String(message) => out.push(ValidationError::new(field, message)),
                    Value::Array(messages) => {
                        for message in messages {
                            let message = message.as_str().ok_or_else(|| {
                                AdapterError::MalformedErrors(format!(
                                    "message for {field:?} is not a string: {message}"
                                ))
                            })?;
                            out.push(ValidationError::new(field, message));
                        }
                    }
                    other => {
                        return Err(AdapterError::MalformedErrors(format!(
                            "messages for {field:?} must be a string or list, got {other}"
                        )));
                    }
                }
            }
            Ok(out)
        }
        Some(Value::Array(items)) => items.iter().map(error_object_to_record).collect(),
        Some(other) => Err(AdapterError::MalformedErrors(format!(
            "expected an object or list, got {other}"
        ))),
        None => Err(AdapterError::MalformedErrors(
            "payload has no errors member".to_string(),
        )),
    }
}

fn error_object_to_record(item: &Value) -> AdapterResult<ValidationError> {
    let detail = item
        .get("detail")
        .or_else(|| item.get("title"))
        .and_then(Value::as_str)
        .ok_or_else(|| AdapterError::MalformedErrors(format!("error without detail: {item}")))?;

    let pointer = item
        .pointer("/source/pointer")
        .and_then(Value::as_str)
        .unwrap_or("/data");
    let field = match pointer.strip_prefix("/data/attributes/") {
        Some(attribute) if !attribute.is_empty() => attribute,
        _ => "base",
    };

    Ok(ValidationError::new(field, detail))
}
