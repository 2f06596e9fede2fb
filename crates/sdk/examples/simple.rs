//! Simple SDK Example
//!
//! Demonstrates basic usage of the Lingua SDK against an offline transport
//! that prints each request and answers with a canned response.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p lingua-sdk --example simple
//! ```

use async_trait::async_trait;
use lingua_sdk::{Language, LinguaClient, SplitRequest, TranslateRequest, Transport, TransportError};
use serde_json::{json, Value};

/// Offline stand-in for an HTTP transport
struct Loopback;

#[async_trait]
impl Transport for Loopback {
    async fn send(&self, body: String) -> Result<String, TransportError> {
        println!("   → {}", body);

        let request: Value = serde_json::from_str(&body)
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        let result = match request["method"].as_str() {
            Some("LMT_split_into_sentences") => json!({
                "lang": "EN",
                "lang_is_confident": true,
                "splitted_texts": [["Hello world.", "How are you?"]]
            }),
            _ => json!({
                "translations": [
                    {"beams": [{"postprocessed_sentence": "Hallo Welt.", "num_symbols": 4}]},
                    {"beams": [{"postprocessed_sentence": "Wie geht es dir?", "num_symbols": 6}]}
                ],
                "source_lang": "EN",
                "target_lang": "DE"
            }),
        };

        let response = json!({"jsonrpc": "2.0", "result": result}).to_string();
        println!("   ← {}\n", response);
        Ok(response)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Lingua SDK - Simple Example");
    println!("===========================\n");

    let client = LinguaClient::new(Loopback);

    // 1. Split text into sentences
    println!("1. Splitting text...");
    let split = client
        .split_into_sentences(&SplitRequest::new(["Hello world. How are you?"]))
        .await?;
    let sentences = split.splitted_texts.concat();
    println!("   ✓ {} sentences ({:?})\n", sentences.len(), split.lang);

    // 2. Translate the sentences
    println!("2. Translating...");
    let response = client
        .translate(&TranslateRequest::new(sentences, Language::German))
        .await?;

    for (i, text) in response.best_texts().into_iter().enumerate() {
        println!("   {}. {}", i + 1, text.unwrap_or("<no translation>"));
    }

    println!("\n✓ Example completed successfully!");

    Ok(())
}
