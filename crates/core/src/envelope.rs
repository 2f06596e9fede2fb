// Request Envelope (wire model)

use crate::constants::{DEFAULT_METHOD, JSONRPC_VERSION};
use serde::Serialize;
use serde_json::{Map, Value};

/// Inner `result` object handed back to callers
pub type ResultObject = Map<String, Value>;

/// Outgoing JSON-RPC request.
///
/// Field order is the serialization order: `jsonrpc`, `method`, `params`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEnvelope<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> RequestEnvelope<'a> {
    /// Build an envelope, falling back to the default method
    pub fn new(method: Option<&'a str>, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: method.unwrap_or(DEFAULT_METHOD),
            params,
        }
    }
}
