//! Codec Contract Tests
//!
//! Wire-level behavior of the JSON-RPC codec through its public API:
//! - Request envelopes carry version, method, params
//! - Response validation reports the first failing check
//! - Caller contract violations are InvalidArgument, never ProtocolError

use lingua_core::{CodecError, JsonRpcCodec, ProtocolCodec, ProtocolError};
use serde_json::{json, Value};

fn decode(wire: &str) -> Result<Value, CodecError> {
    JsonRpcCodec.decode_response(wire).map(Value::Object)
}

fn protocol_message(wire: &str) -> String {
    match decode(wire) {
        Err(CodecError::Protocol(err)) => err.to_string(),
        other => panic!("expected protocol error for {wire}, got {:?}", other),
    }
}

// =============================================================================
// Request encoding
// =============================================================================

#[test]
fn test_request_round_trip() {
    let payloads = [
        json!({}),
        json!([]),
        json!({"jobs": [{"kind": "default", "raw_en_sentence": "Hi"}], "priority": -1}),
        json!(["positional", 1, 2.5, true, null, {"nested": [1, 2, 3]}]),
        json!("scalar params"),
    ];

    for payload in payloads {
        for method in ["LMT_handle_jobs", "customMethod", ""] {
            let wire = JsonRpcCodec.encode_request(&payload, Some(method)).unwrap();
            let envelope: Value = serde_json::from_str(&wire).unwrap();

            assert_eq!(envelope["jsonrpc"], "2.0");
            assert_eq!(envelope["method"], method);
            assert_eq!(envelope["params"], payload);
            assert_eq!(envelope.as_object().unwrap().len(), 3);
        }
    }
}

#[test]
fn test_request_default_method() {
    let wire = JsonRpcCodec.encode_request(&json!({}), None).unwrap();
    assert_eq!(
        wire,
        r#"{"jsonrpc":"2.0","method":"LMT_handle_jobs","params":{}}"#
    );
}

#[test]
fn test_request_encoding_is_deterministic() {
    let payload = json!({"b": 1, "a": [true, false]});
    let first = JsonRpcCodec.encode_request(&payload, Some("m")).unwrap();
    let second = JsonRpcCodec.encode_request(&payload, Some("m")).unwrap();

    assert_eq!(first, second);
    assert!(first.starts_with(r#"{"jsonrpc":"2.0","method":"m","params":"#));
}

#[test]
fn test_request_non_string_method_is_invalid_argument() {
    for method in [json!(123), json!(true), json!(["m"]), json!({"m": 1})] {
        let result = JsonRpcCodec.encode_request_value(&json!({}), Some(&method));
        assert!(
            matches!(result, Err(CodecError::InvalidArgument(_))),
            "method {method} should be rejected"
        );
    }
}

// =============================================================================
// Response decoding
// =============================================================================

#[test]
fn test_response_success() {
    assert_eq!(
        decode(r#"{"jsonrpc":"2.0","result":{"text":"hello"}}"#).unwrap(),
        json!({"text": "hello"})
    );
}

#[test]
fn test_response_non_string_input_is_invalid_argument() {
    for input in [json!(42), Value::Null] {
        let result = JsonRpcCodec.decode_response_value(&input);
        assert!(matches!(result, Err(CodecError::InvalidArgument(_))));
    }
}

#[test]
fn test_response_failures() {
    let cases = [
        (r#"{"jsonrpc":"1.0","result":{}}"#, "version mismatch"),
        (
            r#"{"jsonrpc":"2.0","error":{"message":"bad request"}}"#,
            "bad request",
        ),
        (r#"{"jsonrpc":"2.0"}"#, "result property is missing"),
        ("[1,2,3]", "describes an object"),
        ("not json", "not valid JSON"),
        (r#"{"result":{}}"#, "no jsonrpc property"),
        (r#"{"jsonrpc":"2.0","error":{}}"#, "unknown error"),
        (r#"{"jsonrpc":"2.0","error":null}"#, "unknown error"),
        (r#"{"jsonrpc":"2.0","error":null,"result":{}}"#, "unknown error"),
        (r#"{"jsonrpc":"2.0","result":42}"#, "result property is not an object"),
    ];

    for (wire, expected) in cases {
        let message = protocol_message(wire);
        assert!(
            message.contains(expected),
            "{wire}: expected message containing {expected:?}, got {message:?}"
        );
    }
}

#[test]
fn test_response_first_failure_wins() {
    // Every input below violates several checks at once
    let cases = [
        ("[]", ProtocolError::NotAnObject),
        (r#"{"error":{"message":"x"}}"#, ProtocolError::MissingVersion),
        (
            r#"{"jsonrpc":"2.0","error":{"message":"denied"},"result":[]}"#,
            ProtocolError::Api {
                message: "denied".to_string(),
                code: None,
                data: None,
            },
        ),
    ];

    for (wire, expected) in cases {
        match decode(wire) {
            Err(CodecError::Protocol(err)) => assert_eq!(err, expected, "input: {wire}"),
            other => panic!("expected protocol error for {wire}, got {:?}", other),
        }
    }
}

#[test]
fn test_api_errors_distinguishable_from_corruption() {
    let api = decode(r#"{"jsonrpc":"2.0","error":{"message":"quota"}}"#).unwrap_err();
    let corrupt = decode(r#"{"jsonrpc":"2.0","result":"quota"}"#).unwrap_err();

    assert!(api.is_api_error());
    assert!(!corrupt.is_api_error());
}
