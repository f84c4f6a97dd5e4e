// crates/herbcloud/src/config.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::ConfigError;

/// Stop words excluded from the frequency table regardless of count.
pub const DEFAULT_STOP_WORDS: [&str; 23] = [
  "的", "和", "与", "或", "及", "能", "可", "为", "一", "不", "在", "有", "是", "了", "很", "都",
  "就", "又", "及时", "通过", "使", "因为", "所以",
];

/// Number of ranked entries written for the word cloud.
pub const DEFAULT_TOP_N: usize = 100;

/// Tokens shorter than this (in characters) are discarded.
pub const DEFAULT_MIN_TOKEN_CHARS: usize = 2;

/// Candidate text fields of a record, checked in order.
pub const DEFAULT_TEXT_FIELDS: [&str; 2] = ["effects", "effect"];

/// Top-level configuration for herbcloud.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HerbcloudConfig {
  /// [dictionary] section
  #[serde(default)]
  pub dictionary: DictionaryConfig,
  /// [extractor] section
  #[serde(default)]
  pub extractor: ExtractorConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [dictionary] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionaryConfig {
  /// Additional user dictionary loaded on top of jieba's bundled one.
  ///
  /// One entry per line: `word [freq] [tag]`.
  #[serde(default)]
  pub user_dict: Option<PathBuf>,
}

/// [extractor] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorConfig {
  /// Tokens never counted
  #[serde(default = "default_stop_words")]
  pub stop_words: Vec<String>,
  /// Maximum number of ranked entries
  #[serde(default = "default_top_n")]
  pub top_n: usize,
  /// Minimum token length in characters (not bytes)
  #[serde(default = "default_min_token_chars")]
  pub min_token_chars: usize,
  /// Field names holding the text of a record, in lookup order
  #[serde(default = "default_text_fields")]
  pub text_fields: Vec<String>,
  /// Whether jieba discovers unknown words with its HMM
  #[serde(default = "default_hmm")]
  pub hmm: bool,
}

fn default_stop_words() -> Vec<String> {
  DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect()
}

fn default_top_n() -> usize {
  DEFAULT_TOP_N
}

fn default_min_token_chars() -> usize {
  DEFAULT_MIN_TOKEN_CHARS
}

fn default_text_fields() -> Vec<String> {
  DEFAULT_TEXT_FIELDS.iter().map(|f| f.to_string()).collect()
}

fn default_hmm() -> bool {
  true
}

impl Default for ExtractorConfig {
  fn default() -> Self {
    Self {
      stop_words: default_stop_words(),
      top_n: default_top_n(),
      min_token_chars: default_min_token_chars(),
      text_fields: default_text_fields(),
      hmm: default_hmm(),
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Returns the directive string understood by `tracing_subscriber::EnvFilter`.
  pub fn as_directive(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl std::str::FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "trace" => Ok(Self::Trace),
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warn" => Ok(Self::Warn),
      "error" => Ok(Self::Error),
      _ => Err(format!(
        "Unknown log level: {}. Valid values: trace, debug, info, warn, error",
        s
      )),
    }
  }
}

impl std::fmt::Display for LogLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_directive())
  }
}

// ===== Accessor Methods =====

impl HerbcloudConfig {
  /// Returns the configured user dictionary, `None` if only the bundled dictionary is used.
  pub fn user_dictionary(&self) -> Option<&Path> {
    self.dictionary.user_dict.as_deref()
  }

  /// Returns the extractor settings.
  pub fn extractor(&self) -> &ExtractorConfig {
    &self.extractor
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `extractor.top_n` >= 1
  /// - `extractor.min_token_chars` >= 1
  /// - `extractor.text_fields` is not empty
  ///
  /// # Errors
  /// Returns the first failing check as a `ConfigError`.
  pub fn validate(&self) -> Result<(), ConfigError> {
    self.extractor.validate()
  }
}

impl ExtractorConfig {
  /// Validates the extractor section (see [`HerbcloudConfig::validate`]).
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.top_n < 1 {
      return Err(ConfigError::InvalidTopN { actual: self.top_n });
    }

    if self.min_token_chars < 1 {
      return Err(ConfigError::InvalidMinTokenChars {
        actual: self.min_token_chars,
      });
    }

    if self.text_fields.is_empty() {
      return Err(ConfigError::EmptyTextFields);
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  // ─── Defaults ─────────────────────────────────────────────────────────

  #[test]
  fn default_config_is_valid() {
    let config = HerbcloudConfig::default();
    assert!(config.validate().is_ok());
  }

  #[test]
  fn default_extractor_matches_fixed_constants() {
    let extractor = ExtractorConfig::default();

    assert_eq!(extractor.top_n, 100);
    assert_eq!(extractor.min_token_chars, 2);
    assert_eq!(extractor.text_fields, vec!["effects", "effect"]);
    assert!(extractor.hmm);
    assert_eq!(extractor.stop_words.len(), 23);
    assert!(extractor.stop_words.iter().any(|w| w == "因为"));
  }

  #[test]
  fn deserialize_empty_object_uses_defaults() {
    let config: HerbcloudConfig = serde_json::from_str("{}").unwrap();

    assert!(config.user_dictionary().is_none());
    assert_eq!(config.extractor().top_n, DEFAULT_TOP_N);
    assert_eq!(config.log_level(), LogLevel::Info);
  }

  #[test]
  fn deserialize_partial_extractor_section() {
    let config: HerbcloudConfig = serde_json::from_str(
      r#"{"extractor": {"top_n": 5}, "logging": {"level": "debug"}, "dictionary": {"user_dict": "dict.txt"}}"#,
    )
    .unwrap();

    assert_eq!(config.extractor().top_n, 5);
    assert_eq!(config.extractor().min_token_chars, DEFAULT_MIN_TOKEN_CHARS);
    assert_eq!(config.log_level(), LogLevel::Debug);
    assert_eq!(config.user_dictionary(), Some(Path::new("dict.txt")));
  }

  // ─── validate() Abnormal Cases ──────────────────────────────────────────

  #[test]
  fn validate_rejects_top_n_zero() {
    let mut config = HerbcloudConfig::default();
    config.extractor.top_n = 0;

    let err = config.validate().unwrap_err();
    match err {
      ConfigError::InvalidTopN { actual } => assert_eq!(actual, 0),
      _ => panic!("expected InvalidTopN error"),
    }
  }

  #[test]
  fn validate_rejects_min_token_chars_zero() {
    let mut config = HerbcloudConfig::default();
    config.extractor.min_token_chars = 0;

    let err = config.validate().unwrap_err();
    assert!(matches!(
      err,
      ConfigError::InvalidMinTokenChars { actual: 0 }
    ));
  }

  #[test]
  fn validate_rejects_empty_text_fields() {
    let mut config = HerbcloudConfig::default();
    config.extractor.text_fields.clear();

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::EmptyTextFields));
  }

  #[test]
  fn validate_reports_top_n_first() {
    let mut config = HerbcloudConfig::default();
    config.extractor.top_n = 0; // First error
    config.extractor.text_fields.clear(); // Second error candidate

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTopN { .. }));
  }

  // ─── LogLevel ─────────────────────────────────────────────────────────

  #[test]
  fn log_level_from_str_is_case_insensitive() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
    assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warn);
    assert!(LogLevel::from_str("verbose").is_err());
  }

  #[test]
  fn log_level_display_matches_directive() {
    assert_eq!(format!("{}", LogLevel::Trace), "trace");
    assert_eq!(LogLevel::Error.as_directive(), "error");
  }
}
