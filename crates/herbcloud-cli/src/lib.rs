//! herbcloud-cli crate
//!
//! Standalone batch entry points for the herbal data pipeline.
//!
//! ## Binaries
//! - `wordcloud-preprocess` - herb records JSON → word cloud `[{"name", "value"}]`
//! - `excel-to-json` - spreadsheet → JSON array of row objects
//!
//! ## Usage Example
//! ```bash
//! cd scripts
//! excel-to-json                                  # detailed herb catalogue
//! HERBCLOUD_SHEET_PRESET=all excel-to-json       # every spreadsheet
//! wordcloud-preprocess
//! ```

pub mod config;
pub mod errors;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use herbcloud::config::LogLevel;
use herbcloud::spreadsheet::ConversionReport;
use herbcloud::{RankedEntry, WordCloudService, convert_spreadsheet};

pub use config::{SheetConfig, WordCloudConfig};
pub use errors::{CliError, CliErrorKind};

/// Installs the global tracing subscriber (fmt layer filtered at `level`)
pub fn init_tracing(level: LogLevel) {
  tracing_subscriber::registry()
    .with(tracing_subscriber::fmt::layer())
    .with(EnvFilter::new(level.as_directive()))
    .init();
}

/// Runs the word cloud preprocessing described by `config`
///
/// # Errors
/// Dictionary, input, parse, or output failures
pub fn run_wordcloud(config: &WordCloudConfig) -> errors::Result<Vec<RankedEntry>> {
  let service = WordCloudService::init(&config.herbcloud_config())?;
  tracing::info!(user_dict = ?config.user_dict, "分词辞書を読み込みました");

  Ok(service.run(&config.input, &config.output)?)
}

/// Runs every spreadsheet conversion of `config`, stopping at the first failure
///
/// # Errors
/// The first conversion error
pub fn run_sheets(config: &SheetConfig) -> errors::Result<Vec<ConversionReport>> {
  let mut reports = Vec::with_capacity(config.jobs.len());

  for job in &config.jobs {
    let report = convert_spreadsheet(&job.input, &job.output)?;
    tracing::info!(
      output = %job.output.display(),
      rows = report.rows,
      "转换完成！数据已保存"
    );
    reports.push(report);
  }

  Ok(reports)
}
