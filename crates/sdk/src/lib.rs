//! Lingua SDK - Rust Client Library
//!
//! Thin caller around the JSON-RPC codec: shapes method parameters, hands the
//! encoded request to a pluggable [`Transport`], and maps validated results.
//!
//! # Example
//!
//! ```
//! use lingua_sdk::{Language, LinguaClient, TranslateRequest, Transport, TransportError};
//!
//! // Answers every request with a fixed translation
//! struct Canned;
//!
//! #[async_trait::async_trait]
//! impl Transport for Canned {
//!     async fn send(&self, _body: String) -> Result<String, TransportError> {
//!         Ok(r#"{"jsonrpc":"2.0","result":{"translations":[{"beams":[{"postprocessed_sentence":"Hallo"}]}]}}"#.to_string())
//!     }
//! }
//!
//! tokio_test::block_on(async {
//!     let client = LinguaClient::new(Canned);
//!     let response = client
//!         .translate(&TranslateRequest::new(["Hello"], Language::German))
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(response.best_texts(), vec![Some("Hallo")]);
//! });
//! ```

mod client;
mod error;
mod transport;
mod types;

pub use client::LinguaClient;
pub use error::{Result, SdkError};
pub use transport::{Transport, TransportError};
pub use types::{
    Beam, Language, SplitLang, SplitParams, SplitRequest, SplitResponse, TranslateJob,
    TranslateLang, TranslateParams, TranslateRequest, TranslateResponse, Translation,
    DEFAULT_PRIORITY, SPLIT_METHOD, TRANSLATE_METHOD,
};

pub use lingua_core::{CodecError, JsonRpcCodec, ProtocolCodec, ProtocolError, ResultObject};
