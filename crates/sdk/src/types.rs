//! SDK Request/Response Types
//!
//! Shapes the `params` of the translation methods and maps their `result`
//! objects. The codec itself never looks inside these.

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Translate method (the codec's default)
pub const TRANSLATE_METHOD: &str = lingua_core::DEFAULT_METHOD;

/// Sentence splitting method
pub const SPLIT_METHOD: &str = "LMT_split_into_sentences";

/// Queue priority the service expects for interactive requests
pub const DEFAULT_PRIORITY: i32 = -1;

/// Job kind for plain sentence translation
const JOB_KIND_DEFAULT: &str = "default";

/// Language codes accepted by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Let the service detect the source language
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "EN")]
    English,
    #[serde(rename = "DE")]
    German,
    #[serde(rename = "FR")]
    French,
    #[serde(rename = "ES")]
    Spanish,
    #[serde(rename = "IT")]
    Italian,
    #[serde(rename = "NL")]
    Dutch,
    #[serde(rename = "PL")]
    Polish,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Auto => "auto",
            Language::English => "EN",
            Language::German => "DE",
            Language::French => "FR",
            Language::Spanish => "ES",
            Language::Italian => "IT",
            Language::Dutch => "NL",
            Language::Polish => "PL",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AUTO" => Ok(Language::Auto),
            "EN" => Ok(Language::English),
            "DE" => Ok(Language::German),
            "FR" => Ok(Language::French),
            "ES" => Ok(Language::Spanish),
            "IT" => Ok(Language::Italian),
            "NL" => Ok(Language::Dutch),
            "PL" => Ok(Language::Polish),
            _ => Err(SdkError::InvalidRequest(format!(
                "unsupported language: {}",
                s
            ))),
        }
    }
}

/// Translate one or more sentences (`LMT_handle_jobs`)
#[derive(Debug, Clone, PartialEq)]
pub struct TranslateRequest {
    pub texts: Vec<String>,
    pub source_lang: Language,
    pub target_lang: Language,
    /// Empty means: derive from source and target
    pub preferred_langs: Vec<Language>,
    pub priority: i32,
}

impl TranslateRequest {
    pub fn new<I, S>(texts: I, target_lang: Language) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            source_lang: Language::Auto,
            target_lang,
            preferred_langs: Vec::new(),
            priority: DEFAULT_PRIORITY,
        }
    }

    pub fn with_source_lang(mut self, source_lang: Language) -> Self {
        self.source_lang = source_lang;
        self
    }

    pub fn with_preferred_langs(mut self, langs: Vec<Language>) -> Self {
        self.preferred_langs = langs;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.texts.is_empty() {
            return Err(SdkError::InvalidRequest(
                "texts must not be empty".to_string(),
            ));
        }
        if self.target_lang == Language::Auto {
            return Err(SdkError::InvalidRequest(
                "target language cannot be auto".to_string(),
            ));
        }
        if self.source_lang == self.target_lang {
            return Err(SdkError::InvalidRequest(format!(
                "source and target language are both {}",
                self.target_lang
            )));
        }
        Ok(())
    }

    /// Build the wire `params` object
    pub fn to_params(&self) -> TranslateParams {
        TranslateParams {
            jobs: self
                .texts
                .iter()
                .map(|text| TranslateJob {
                    kind: JOB_KIND_DEFAULT,
                    raw_en_sentence: text.clone(),
                })
                .collect(),
            lang: TranslateLang {
                user_preferred_langs: preferred_langs(
                    &self.preferred_langs,
                    self.source_lang,
                    self.target_lang,
                ),
                source_lang_user_selected: self.source_lang,
                target_lang: self.target_lang,
            },
            priority: self.priority,
        }
    }
}

fn preferred_langs(explicit: &[Language], source: Language, target: Language) -> Vec<Language> {
    if !explicit.is_empty() {
        return explicit.to_vec();
    }
    let mut langs = vec![target];
    if source != Language::Auto {
        langs.push(source);
    }
    langs
}

#[derive(Debug, Clone, Serialize)]
pub struct TranslateParams {
    pub jobs: Vec<TranslateJob>,
    pub lang: TranslateLang,
    pub priority: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranslateJob {
    pub kind: &'static str,
    pub raw_en_sentence: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranslateLang {
    pub user_preferred_langs: Vec<Language>,
    pub source_lang_user_selected: Language,
    pub target_lang: Language,
}

/// Result of `LMT_handle_jobs`
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub source_lang: Option<String>,
    #[serde(default)]
    pub target_lang: Option<String>,
    #[serde(default)]
    pub source_lang_is_confident: Option<bool>,
}

impl TranslateResponse {
    /// Top-ranked text per job, in job order
    pub fn best_texts(&self) -> Vec<Option<&str>> {
        self.translations.iter().map(Translation::best).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub beams: Vec<Beam>,
}

impl Translation {
    pub fn best(&self) -> Option<&str> {
        self.beams
            .first()
            .map(|beam| beam.postprocessed_sentence.as_str())
    }
}

/// One candidate rendering of a sentence
#[derive(Debug, Clone, Deserialize)]
pub struct Beam {
    pub postprocessed_sentence: String,
    #[serde(default)]
    pub num_symbols: Option<u32>,
}

/// Split texts into sentences (`LMT_split_into_sentences`)
#[derive(Debug, Clone, PartialEq)]
pub struct SplitRequest {
    pub texts: Vec<String>,
    pub lang: Language,
    pub preferred_langs: Vec<Language>,
}

impl SplitRequest {
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            lang: Language::Auto,
            preferred_langs: Vec::new(),
        }
    }

    pub fn with_lang(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.texts.is_empty() {
            return Err(SdkError::InvalidRequest(
                "texts must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_params(&self) -> SplitParams {
        SplitParams {
            texts: self.texts.clone(),
            lang: SplitLang {
                lang_user_selected: self.lang,
                user_preferred_langs: self.preferred_langs.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitParams {
    pub texts: Vec<String>,
    pub lang: SplitLang,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitLang {
    pub lang_user_selected: Language,
    pub user_preferred_langs: Vec<Language>,
}

/// Result of `LMT_split_into_sentences`
#[derive(Debug, Clone, Deserialize)]
pub struct SplitResponse {
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub lang_is_confident: Option<bool>,
    pub splitted_texts: Vec<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_language_parse_is_case_insensitive() {
        assert_eq!("de".parse::<Language>().unwrap(), Language::German);
        assert_eq!("Auto".parse::<Language>().unwrap(), Language::Auto);
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn test_translate_params_shape() {
        let request = TranslateRequest::new(["Hello.", "Bye."], Language::German);
        let params = serde_json::to_value(request.to_params()).unwrap();

        assert_eq!(
            params,
            json!({
                "jobs": [
                    {"kind": "default", "raw_en_sentence": "Hello."},
                    {"kind": "default", "raw_en_sentence": "Bye."}
                ],
                "lang": {
                    "user_preferred_langs": ["DE"],
                    "source_lang_user_selected": "auto",
                    "target_lang": "DE"
                },
                "priority": -1
            })
        );
    }

    #[test]
    fn test_translate_preferred_langs_include_explicit_source() {
        let request =
            TranslateRequest::new(["Hallo"], Language::English).with_source_lang(Language::German);
        let params = request.to_params();

        assert_eq!(
            params.lang.user_preferred_langs,
            vec![Language::English, Language::German]
        );

        let request = request.with_preferred_langs(vec![Language::French]);
        assert_eq!(
            request.to_params().lang.user_preferred_langs,
            vec![Language::French]
        );
    }

    #[test]
    fn test_translate_validation() {
        let empty = TranslateRequest::new(Vec::<String>::new(), Language::German);
        assert!(empty.validate().unwrap_err().to_string().contains("empty"));

        let auto_target = TranslateRequest::new(["x"], Language::Auto);
        assert!(auto_target
            .validate()
            .unwrap_err()
            .to_string()
            .contains("auto"));

        let same = TranslateRequest::new(["x"], Language::French).with_source_lang(Language::French);
        assert!(same.validate().is_err());

        assert!(TranslateRequest::new(["x"], Language::French)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_split_params_shape() {
        let request = SplitRequest::new(["One. Two."]).with_lang(Language::English);
        let params = serde_json::to_value(request.to_params()).unwrap();

        assert_eq!(
            params,
            json!({
                "texts": ["One. Two."],
                "lang": {"lang_user_selected": "EN", "user_preferred_langs": []}
            })
        );
        assert!(SplitRequest::new(Vec::<String>::new()).validate().is_err());
    }

    #[test]
    fn test_translate_response_best_texts() {
        let response: TranslateResponse = serde_json::from_value(json!({
            "translations": [
                {"beams": [
                    {"postprocessed_sentence": "Hallo.", "num_symbols": 3},
                    {"postprocessed_sentence": "Guten Tag.", "num_symbols": 4}
                ]},
                {"beams": []}
            ],
            "target_lang": "DE",
            "source_lang": "EN",
            "source_lang_is_confident": false
        }))
        .unwrap();

        assert_eq!(response.best_texts(), vec![Some("Hallo."), None]);
        assert_eq!(response.source_lang.as_deref(), Some("EN"));
    }
}
