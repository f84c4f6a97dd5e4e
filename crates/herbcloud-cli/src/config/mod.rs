//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_LOG_LEVEL, DEFAULT_SHEET_PRESET, DEFAULT_WORDCLOUD_INPUT, DEFAULT_WORDCLOUD_OUTPUT,
};
pub use env::{SheetConfig, SheetJob, SheetPreset, WordCloudConfig};
