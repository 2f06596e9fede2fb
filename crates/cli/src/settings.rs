//! CLI settings
//!
//! Layered: built-in defaults, then an optional TOML file, then `LINGUA_*`
//! environment variables. Command-line flags override all of these.

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use lingua_core::DEFAULT_METHOD;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "LINGUA";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Method used by `encode` when `--method` is not given
    pub default_method: String,
    pub log_format: LogFormat,
    /// Pretty-print decoded results
    pub pretty: bool,
}

impl Settings {
    /// Load settings. An explicit `path` must exist; the per-user file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("default_method", DEFAULT_METHOD)?
            .set_default("log_format", "pretty")?
            .set_default("pretty", true)?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => match default_config_path() {
                Some(path) => builder.add_source(File::from(path).required(false)),
                None => builder,
            },
        };

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

/// `~/.config/lingua/config.toml` (platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "lingua").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "default_method = \"LMT_split_into_sentences\"").unwrap();
        writeln!(file, "pretty = false").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();

        assert_eq!(settings.default_method, "LMT_split_into_sentences");
        assert!(!settings.pretty);
        assert_eq!(settings.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        assert!(Settings::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_invalid_log_format_fails() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "log_format = \"xml\"").unwrap();

        assert!(Settings::load(Some(file.path())).is_err());
    }
}
