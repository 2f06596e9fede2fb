// Protocol constants (no magic values)

/// JSON-RPC version tag sent on every request and required on every response
pub const JSONRPC_VERSION: &str = "2.0";

/// Method used when the caller does not name one (primary translate operation)
pub const DEFAULT_METHOD: &str = "LMT_handle_jobs";

/// Envelope member names
pub mod field {
    pub const JSONRPC: &str = "jsonrpc";
    pub const RESULT: &str = "result";
    pub const ERROR: &str = "error";
    pub const MESSAGE: &str = "message";
    pub const CODE: &str = "code";
    pub const DATA: &str = "data";
}
