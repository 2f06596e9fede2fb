//! Lingua CLI - encode JSON-RPC requests and validate responses offline
//!
//! Reads from files or stdin and writes wire output to stdout, so it composes
//! with any HTTP client:
//!
//! ```text
//! lingua translate-params --to DE "Hello world" \
//!     | curl -s -H 'content-type: application/json' -d @- "$LINGUA_ENDPOINT" \
//!     | lingua decode
//! ```

mod logging;
mod settings;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use lingua_core::{CodecError, JsonRpcCodec, ProtocolCodec};
use lingua_sdk::{Language, SplitRequest, TranslateRequest, SPLIT_METHOD, TRANSLATE_METHOD};
use serde_json::Value;
use settings::Settings;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

/// Response was not a well-formed JSON-RPC envelope
const EXIT_MALFORMED: u8 = 2;
/// Service answered with an error object
const EXIT_API_ERROR: u8 = 3;

#[derive(Parser)]
#[command(name = "lingua")]
#[command(about = "Lingua translation API JSON-RPC codec", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (default: per-user config dir, if present)
    #[arg(long, global = true, env = "LINGUA_CONFIG")]
    config: Option<PathBuf>,

    /// Print results on one line
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a request envelope from a params JSON document
    Encode {
        /// Method name (default: settings, then LMT_handle_jobs)
        #[arg(short, long)]
        method: Option<String>,

        /// Params as a JSON string
        #[arg(long, conflicts_with = "params_file")]
        params: Option<String>,

        /// Read params from a file instead of stdin
        #[arg(long)]
        params_file: Option<PathBuf>,
    },

    /// Validate a response envelope and print its result object
    Decode {
        /// Response file (default: stdin)
        input: Option<PathBuf>,
    },

    /// Encode a translate request (LMT_handle_jobs)
    TranslateParams {
        /// Target language (EN, DE, FR, ES, IT, NL, PL)
        #[arg(long)]
        to: Language,

        /// Source language
        #[arg(long, default_value = "auto")]
        from: Language,

        /// Sentences to translate
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Encode a sentence-split request (LMT_split_into_sentences)
    SplitParams {
        /// Language of the texts
        #[arg(long, default_value = "auto")]
        lang: Language,

        #[arg(required = true)]
        texts: Vec<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    logging::init(settings.log_format)?;
    debug!(?settings, "Settings loaded");

    let codec = JsonRpcCodec::new();
    let pretty = settings.pretty && !cli.compact;

    match cli.command {
        Commands::Encode {
            method,
            params,
            params_file,
        } => {
            let raw = match (params, params_file) {
                (Some(params), _) => params,
                (None, Some(path)) => read_file(&path)?,
                (None, None) => read_stdin()?,
            };
            println!(
                "{}",
                encode_params(&codec, &raw, method.as_deref(), &settings.default_method)?
            );
        }

        Commands::Decode { input } => {
            let wire = match input {
                Some(path) => read_file(&path)?,
                None => read_stdin()?,
            };

            match codec.decode_response(&wire) {
                Ok(result) => {
                    let result = Value::Object(result);
                    let out = if pretty {
                        serde_json::to_string_pretty(&result)?
                    } else {
                        serde_json::to_string(&result)?
                    };
                    println!("{}", out);
                }
                Err(e) => return Ok(report_decode_error(&e)),
            }
        }

        Commands::TranslateParams { to, from, texts } => {
            let request = TranslateRequest::new(texts, to).with_source_lang(from);
            request.validate()?;

            println!(
                "{}",
                codec.encode_request(&request.to_params(), Some(TRANSLATE_METHOD))?
            );
        }

        Commands::SplitParams { lang, texts } => {
            let request = SplitRequest::new(texts).with_lang(lang);
            request.validate()?;

            println!(
                "{}",
                codec.encode_request(&request.to_params(), Some(SPLIT_METHOD))?
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print a decode failure and pick the exit code for it
/// Encode raw JSON params; `--method` overrides the configured default
fn encode_params(
    codec: &JsonRpcCodec,
    raw: &str,
    method: Option<&str>,
    default_method: &str,
) -> Result<String> {
    let params: Value = serde_json::from_str(raw).context("Invalid JSON params")?;
    let method = method.unwrap_or(default_method);

    Ok(codec.encode_request(&params, Some(method))?)
}

fn report_decode_error(err: &CodecError) -> ExitCode {
    let heading = if err.is_api_error() {
        "✗ API call failed"
    } else {
        "✗ Invalid JSON-RPC response"
    };
    eprintln!("{}", heading.red().bold());
    eprintln!("  {}", err);

    ExitCode::from(decode_exit_code(err))
}

fn decode_exit_code(err: &CodecError) -> u8 {
    if err.is_api_error() {
        EXIT_API_ERROR
    } else {
        EXIT_MALFORMED
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}
