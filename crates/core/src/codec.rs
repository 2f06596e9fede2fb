//! Protocol Codec
//!
//! Encodes JSON-RPC requests and validates JSON-RPC responses.
//!
//! Responses are parsed into an untyped [`serde_json::Value`] and inspected
//! member by member, so every structural failure maps to its own
//! [`ProtocolError`] instead of a generic deserialization error.

use crate::constants::{field, JSONRPC_VERSION};
use crate::envelope::{RequestEnvelope, ResultObject};
use crate::error::{CodecError, ProtocolError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Capability interface for the request/response codec
pub trait ProtocolCodec: Send + Sync {
    /// Encode `payload` as the `params` of a request for `method`.
    ///
    /// `None` selects [`crate::DEFAULT_METHOD`].
    fn encode_request<P>(&self, payload: &P, method: Option<&str>) -> Result<String>
    where
        P: Serialize + ?Sized;

    /// Validate a raw response and return its `result` object
    fn decode_response(&self, wire: &str) -> Result<ResultObject>;

    /// Encode from untyped input.
    ///
    /// A method that is neither absent, `null`, nor a string is rejected
    /// before anything is encoded.
    fn encode_request_value(&self, payload: &Value, method: Option<&Value>) -> Result<String> {
        let method = match method {
            None | Some(Value::Null) => None,
            Some(Value::String(method)) => Some(method.as_str()),
            Some(other) => {
                return Err(CodecError::InvalidArgument(format!(
                    "method must be a string, got {}",
                    json_type(other)
                )))
            }
        };
        self.encode_request(payload, method)
    }

    /// Decode from untyped input; only JSON strings are accepted
    fn decode_response_value(&self, wire: &Value) -> Result<ResultObject> {
        match wire {
            Value::String(wire) => self.decode_response(wire),
            other => Err(CodecError::InvalidArgument(format!(
                "response must be a string, got {}",
                json_type(other)
            ))),
        }
    }

    /// Decode, validate, then map the result object into `T`
    fn decode_response_as<T>(&self, wire: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.decode_response(wire).and_then(result_into)
    }
}

/// Map a validated `result` object into `T`.
///
/// A shape mismatch is a [`ProtocolError::ResultShape`].
pub fn result_into<T>(result: ResultObject) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(Value::Object(result))
        .map_err(|e| ProtocolError::ResultShape(e.to_string()).into())
}

/// Stateless JSON-RPC 2.0 codec
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonRpcCodec;

impl JsonRpcCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ProtocolCodec for JsonRpcCodec {
    fn encode_request<P>(&self, payload: &P, method: Option<&str>) -> Result<String>
    where
        P: Serialize + ?Sized,
    {
        let params = serde_json::to_value(payload)?;
        if params.is_null() {
            return Err(CodecError::InvalidArgument(
                "payload must not be null".to_string(),
            ));
        }

        let envelope = RequestEnvelope::new(method, params);
        let wire = serde_json::to_string(&envelope)?;

        debug!(method = envelope.method, bytes = wire.len(), "Encoded request");

        Ok(wire)
    }

    fn decode_response(&self, wire: &str) -> Result<ResultObject> {
        let value: Value =
            serde_json::from_str(wire).map_err(|e| ProtocolError::Malformed(e.to_string()))?;

        let result = validate(value)?;

        debug!(
            bytes = wire.len(),
            members = result.len(),
            "Decoded response"
        );

        Ok(result)
    }
}

/// Validate a parsed response envelope.
///
/// Checks run in a fixed order and stop at the first failure:
/// object, `jsonrpc` present, version, `error`, `result` present, `result` is an object.
fn validate(value: Value) -> std::result::Result<ResultObject, ProtocolError> {
    let Value::Object(mut envelope) = value else {
        return Err(ProtocolError::NotAnObject);
    };

    let version = envelope
        .get(field::JSONRPC)
        .ok_or(ProtocolError::MissingVersion)?;
    if version.as_str() != Some(JSONRPC_VERSION) {
        return Err(ProtocolError::VersionMismatch {
            expected: JSONRPC_VERSION.to_string(),
            found: describe(version),
        });
    }

    // Any `error` member is fatal, including `null`
    if let Some(error) = envelope.get(field::ERROR) {
        return Err(api_error(error));
    }

    match envelope.remove(field::RESULT) {
        None => Err(ProtocolError::MissingResult),
        Some(Value::Object(result)) => Ok(result),
        Some(_) => Err(ProtocolError::ResultNotObject),
    }
}

fn api_error(error: &Value) -> ProtocolError {
    let Some(message) = error.as_object().and_then(|e| e.get(field::MESSAGE)) else {
        return ProtocolError::UnknownApiError;
    };

    ProtocolError::Api {
        message: describe(message),
        code: error.get(field::CODE).and_then(Value::as_i64),
        data: error.get(field::DATA).cloned(),
    }
}

/// Strings verbatim, everything else as compact JSON
fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
