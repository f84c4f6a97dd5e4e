//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use herbcloud::config::{DictionaryConfig, HerbcloudConfig, LogLevel, LoggingConfig};

use super::constants::{
  DEFAULT_LOG_LEVEL, DEFAULT_SHEET_PRESET, DEFAULT_WORDCLOUD_INPUT, DEFAULT_WORDCLOUD_OUTPUT,
};
use crate::errors::CliError;

/// Spreadsheet conversion job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetPreset {
  /// Geographic distribution of herbs
  HebalGeo,
  /// Detailed herb catalogue (input of the word cloud)
  DetailedHerbs,
  /// Five-element scores
  FiveElements,
}

impl SheetPreset {
  /// Every preset, in the order `all` runs them
  pub const ALL: [SheetPreset; 3] = [
    SheetPreset::HebalGeo,
    SheetPreset::DetailedHerbs,
    SheetPreset::FiveElements,
  ];

  /// Spreadsheet read by this preset
  pub fn input_path(&self) -> PathBuf {
    PathBuf::from(match self {
      Self::HebalGeo => "../public/data/hebal_geo.xlsx",
      Self::DetailedHerbs => "../public/data/final_herbal_data_by_id.xlsx",
      Self::FiveElements => "../public/data/herbal_five_element_scores.xlsx",
    })
  }

  /// JSON written by this preset
  pub fn output_path(&self) -> PathBuf {
    PathBuf::from(match self {
      Self::HebalGeo => "../public/data/hebal_geo.json",
      Self::DetailedHerbs => "../public/data/herbal_detailed_data.json",
      Self::FiveElements => "../public/data/herbal_five_elements.json",
    })
  }
}

impl FromStr for SheetPreset {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "hebal-geo" => Ok(Self::HebalGeo),
      "detailed-herbs" => Ok(Self::DetailedHerbs),
      "five-elements" => Ok(Self::FiveElements),
      _ => Err(format!(
        "Unknown preset: {}. Valid values: hebal-geo, detailed-herbs, five-elements, all",
        s
      )),
    }
  }
}

/// One spreadsheet → JSON conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetJob {
  /// Spreadsheet to read
  pub input: PathBuf,
  /// JSON array to write
  pub output: PathBuf,
}

impl From<SheetPreset> for SheetJob {
  fn from(preset: SheetPreset) -> Self {
    Self {
      input: preset.input_path(),
      output: preset.output_path(),
    }
  }
}

/// `excel-to-json` configuration
#[derive(Debug, Clone)]
pub struct SheetConfig {
  /// Conversions to run, in order
  pub jobs: Vec<SheetJob>,
  /// Log level
  pub log_level: LogLevel,
}

impl SheetConfig {
  /// Loads configuration from environment variables
  ///
  /// - `HERBCLOUD_SHEET_PRESET`: `hebal-geo` | `detailed-herbs` | `five-elements` | `all`
  /// - `HERBCLOUD_SHEET_INPUT` / `HERBCLOUD_SHEET_OUTPUT`: override the preset paths
  /// - `HERBCLOUD_LOG`: log level
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Same as [`from_env`](Self::from_env) with an injectable variable source
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let preset_str =
      lookup("HERBCLOUD_SHEET_PRESET").unwrap_or_else(|| DEFAULT_SHEET_PRESET.to_string());
    let input = lookup("HERBCLOUD_SHEET_INPUT").map(PathBuf::from);
    let output = lookup("HERBCLOUD_SHEET_OUTPUT").map(PathBuf::from);

    let jobs = if preset_str.eq_ignore_ascii_case("all") {
      if input.is_some() || output.is_some() {
        return Err(CliError::config(
          "HERBCLOUD_SHEET_INPUT / HERBCLOUD_SHEET_OUTPUT cannot be combined with preset `all`",
        ));
      }
      SheetPreset::ALL.into_iter().map(SheetJob::from).collect()
    } else {
      let preset = SheetPreset::from_str(&preset_str).map_err(CliError::config)?;
      vec![SheetJob {
        input: input.unwrap_or_else(|| preset.input_path()),
        output: output.unwrap_or_else(|| preset.output_path()),
      }]
    };

    let log_level = log_level_from(&lookup)?;

    Ok(Self { jobs, log_level })
  }
}

/// `wordcloud-preprocess` configuration
#[derive(Debug, Clone)]
pub struct WordCloudConfig {
  /// Record array to read
  pub input: PathBuf,
  /// Ranked entries to write
  pub output: PathBuf,
  /// Optional jieba user dictionary
  pub user_dict: Option<PathBuf>,
  /// Log level
  pub log_level: LogLevel,
}

impl WordCloudConfig {
  /// Loads configuration from environment variables
  ///
  /// - `HERBCLOUD_WORDCLOUD_INPUT` / `HERBCLOUD_WORDCLOUD_OUTPUT`: file paths
  /// - `HERBCLOUD_USER_DICT`: jieba user dictionary
  /// - `HERBCLOUD_LOG`: log level
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Same as [`from_env`](Self::from_env) with an injectable variable source
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let input = lookup("HERBCLOUD_WORDCLOUD_INPUT")
      .unwrap_or_else(|| DEFAULT_WORDCLOUD_INPUT.to_string());
    let output = lookup("HERBCLOUD_WORDCLOUD_OUTPUT")
      .unwrap_or_else(|| DEFAULT_WORDCLOUD_OUTPUT.to_string());
    let user_dict = lookup("HERBCLOUD_USER_DICT").filter(|s| !s.is_empty()).map(PathBuf::from);
    let log_level = log_level_from(&lookup)?;

    Ok(Self {
      input: PathBuf::from(input),
      output: PathBuf::from(output),
      user_dict,
      log_level,
    })
  }

  /// Library configuration: fixed extractor defaults plus the user dictionary
  pub fn herbcloud_config(&self) -> HerbcloudConfig {
    HerbcloudConfig {
      dictionary: DictionaryConfig {
        user_dict: self.user_dict.clone(),
      },
      logging: LoggingConfig {
        level: self.log_level,
      },
      ..HerbcloudConfig::default()
    }
  }
}

fn log_level_from<F>(lookup: &F) -> crate::errors::Result<LogLevel>
where
  F: Fn(&str) -> Option<String>,
{
  let level = lookup("HERBCLOUD_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
  LogLevel::from_str(&level).map_err(CliError::config)
}
