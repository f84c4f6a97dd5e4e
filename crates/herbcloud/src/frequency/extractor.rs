//! Word frequency extraction for the word cloud.
//!
//! Records → resolved text → segmented tokens → filtered tokens → frequency table → top-N entries.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::config::ExtractorConfig;
use crate::errors::ConfigError;
use crate::frequency::{ExtractionReport, FrequencyTable};
use crate::models::{RankedEntry, Record, resolve_text};
use crate::segmenter::{Segmenter, should_count};

/// Turns a sequence of records into a ranked frequency list.
///
/// Generic over the [`Segmenter`] so the counting logic can be exercised without a dictionary.
pub struct WordFrequencyExtractor<S> {
  segmenter: S,
  stop_words: HashSet<String>,
  min_token_chars: usize,
  top_n: usize,
  text_fields: Vec<String>,
}

impl<S: Segmenter> WordFrequencyExtractor<S> {
  /// Builds an extractor from a segmenter and validated settings.
  ///
  /// # Errors
  /// Returns the first failing check of [`ExtractorConfig::validate`].
  pub fn new(segmenter: S, config: &ExtractorConfig) -> Result<Self, ConfigError> {
    config.validate()?;

    Ok(Self {
      segmenter,
      stop_words: config.stop_words.iter().cloned().collect(),
      min_token_chars: config.min_token_chars,
      top_n: config.top_n,
      text_fields: config.text_fields.clone(),
    })
  }

  /// Returns the segmenter in use.
  pub fn segmenter(&self) -> &S {
    &self.segmenter
  }

  /// Ranks the tokens of all records.
  ///
  /// Never fails: records without text contribute nothing.
  pub fn extract(&self, records: &[Record]) -> Vec<RankedEntry> {
    self.extract_with_report(records).0
  }

  /// Same as [`extract`](Self::extract), also returning run counters.
  pub fn extract_with_report(&self, records: &[Record]) -> (Vec<RankedEntry>, ExtractionReport) {
    let mut report = ExtractionReport::default();
    let table = self.frequency_table(records, &mut report);

    report.distinct_tokens = table.len();
    let ranked = table.into_ranked(self.top_n);
    report.entries = ranked.len();

    info!(
      records = report.records,
      records_without_text = report.records_without_text,
      tokens_segmented = report.tokens_segmented,
      tokens_kept = report.tokens_kept,
      tokens_filtered = report.tokens_filtered(),
      distinct_tokens = report.distinct_tokens,
      entries = report.entries,
      "Word frequency extraction completed"
    );

    (ranked, report)
  }

  /// Accumulates the filtered tokens of every record.
  pub fn frequency_table(
    &self,
    records: &[Record],
    report: &mut ExtractionReport,
  ) -> FrequencyTable {
    let mut table = FrequencyTable::new();

    for (index, record) in records.iter().enumerate() {
      let text = resolve_text(record, &self.text_fields);
      report.record_record(!text.is_empty());

      if text.is_empty() {
        debug!(index, "Record has no text");
        continue;
      }

      let tokens = self.segmenter.segment(&text);
      let segmented = tokens.len();
      let mut kept = 0;

      for token in tokens {
        if should_count(token, &self.stop_words, self.min_token_chars) {
          table.record(token);
          kept += 1;
        }
      }

      report.record_tokens(segmented, kept);
      debug!(index, segmented, kept, "Record processed");
    }

    table
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
