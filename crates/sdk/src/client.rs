//! Lingua Client Implementation

use crate::error::{Result, SdkError};
use crate::transport::Transport;
use crate::types::{
    SplitRequest, SplitResponse, TranslateRequest, TranslateResponse, SPLIT_METHOD,
    TRANSLATE_METHOD,
};
use lingua_core::{JsonRpcCodec, ProtocolCodec, ResultObject};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Lingua translation service client
///
/// Wraps a [`Transport`] with the JSON-RPC codec. Clones share the transport.
///
/// # Example
///
/// ```no_run
/// # use lingua_sdk::{LinguaClient, Transport, TransportError, TranslateRequest, Language};
/// # struct Http;
/// # #[async_trait::async_trait]
/// # impl Transport for Http {
/// #     async fn send(&self, _body: String) -> Result<String, TransportError> { unimplemented!() }
/// # }
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = LinguaClient::new(Http);
/// let response = client
///     .translate(&TranslateRequest::new(["Hello world"], Language::German))
///     .await?;
/// println!("{:?}", response.best_texts());
/// # Ok(())
/// # }
/// ```
pub struct LinguaClient<T, C = JsonRpcCodec> {
    transport: Arc<T>,
    codec: C,
}

impl<T: Transport> LinguaClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_codec(transport, JsonRpcCodec)
    }
}

impl<T: Transport, C: ProtocolCodec> LinguaClient<T, C> {
    pub fn with_codec(transport: T, codec: C) -> Self {
        Self {
            transport: Arc::new(transport),
            codec,
        }
    }

    /// Call `method` and return the validated `result` object
    pub async fn call<P>(&self, method: &str, params: &P) -> Result<ResultObject>
    where
        P: Serialize + ?Sized + Sync,
    {
        let body = self.codec.encode_request(params, Some(method))?;

        debug!(method, bytes = body.len(), "Sending request");
        let response = self.transport.send(body).await?;

        self.codec.decode_response(&response).map_err(|e| {
            if e.is_api_error() {
                warn!(method, error = %e, "API rejected call");
            } else {
                warn!(method, error = %e, "Malformed response");
            }
            SdkError::from(e)
        })
    }

    /// Call `method` and map the `result` object into `R`
    pub async fn call_as<P, R>(&self, method: &str, params: &P) -> Result<R>
    where
        P: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let result = self.call(method, params).await?;
        Ok(lingua_core::result_into(result)?)
    }

    /// Translate texts (`LMT_handle_jobs`)
    pub async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse> {
        request.validate()?;
        self.call_as(TRANSLATE_METHOD, &request.to_params()).await
    }

    /// Split texts into sentences (`LMT_split_into_sentences`)
    pub async fn split_into_sentences(&self, request: &SplitRequest) -> Result<SplitResponse> {
        request.validate()?;
        self.call_as(SPLIT_METHOD, &request.to_params()).await
    }
}

impl<T, C: Clone> Clone for LinguaClient<T, C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            codec: self.codec.clone(),
        }
    }
}
