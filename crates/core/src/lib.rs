// Lingua Core - JSON-RPC Protocol Codec
// NO transport, NO retries, NO method-specific knowledge: pure encode/validate

pub mod codec;
pub mod constants;
pub mod envelope;
pub mod error;

pub use codec::{result_into, JsonRpcCodec, ProtocolCodec};
pub use constants::{DEFAULT_METHOD, JSONRPC_VERSION};
pub use envelope::{RequestEnvelope, ResultObject};
pub use error::{CodecError, ProtocolError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
