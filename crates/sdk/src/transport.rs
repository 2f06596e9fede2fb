//! Transport Port
//!
//! The client hands a fully encoded request body to a [`Transport`] and gets
//! the raw response body back. Status handling and connection errors stay on
//! this side of the port; only a response body ever reaches the codec.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Carries one encoded request to the service and returns the raw response body
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, body: String) -> Result<String, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, body: String) -> Result<String, TransportError> {
        (**self).send(body).await
    }
}
