// Central Error Type for the Codec

use serde_json::Value;
use thiserror::Error;

/// Codec-level error type
#[derive(Error, Debug)]
pub enum CodecError {
    /// Caller broke the interface contract (non-string method, non-string response, null payload)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CodecError {
    /// Returns the protocol error if this is one
    pub fn as_protocol(&self) -> Option<&ProtocolError> {
        match self {
            CodecError::Protocol(err) => Some(err),
            _ => None,
        }
    }

    /// True when the API itself rejected the call (as opposed to a broken envelope)
    pub fn is_api_error(&self) -> bool {
        self.as_protocol().is_some_and(ProtocolError::is_api_error)
    }
}

/// A rejected response.
///
/// Variants are listed in the order the validator checks them; the first
/// failing check is the one reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProtocolError {
    /// Response body was not valid JSON at all
    #[error("response is not valid JSON: {0}")]
    Malformed(String),

    #[error("did not return JSON that describes an object")]
    NotAnObject,

    #[error("no jsonrpc property: does not look like a JSON-RPC response")]
    MissingVersion,

    #[error("jsonrpc version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: String, found: String },

    /// The service reported an error inside the envelope
    #[error("API call resulted in error: {message}")]
    Api {
        message: String,
        code: Option<i64>,
        data: Option<Value>,
    },

    #[error("API call resulted in unknown error")]
    UnknownApiError,

    #[error("malformed result: result property is missing")]
    MissingResult,

    #[error("malformed result: result property is not an object")]
    ResultNotObject,

    /// Result object did not fit the caller's target type
    #[error("malformed result: {0}")]
    ResultShape(String),
}

impl ProtocolError {
    /// True for errors the service reported itself.
    ///
    /// Everything else means the envelope was corrupt or not JSON-RPC at all.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            ProtocolError::Api { .. } | ProtocolError::UnknownApiError
        )
    }

    /// Message reported by the API, verbatim
    pub fn api_message(&self) -> Option<&str> {
        match self {
            ProtocolError::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Result type alias using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
