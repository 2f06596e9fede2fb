//! SDK Error Types

use crate::transport::TransportError;
use lingua_core::CodecError;
use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl SdkError {
    /// True when the service itself rejected the call
    pub fn is_api_error(&self) -> bool {
        matches!(self, SdkError::Codec(e) if e.is_api_error())
    }
}
