//! Word segmenter using jieba

use std::collections::HashSet;
use std::sync::Arc;

use jieba_rs::Jieba;
use tracing::debug;

/// Splits text into word tokens.
///
/// This trait allows swapping the dictionary-backed implementation (`JiebaSegmenter`)
/// with deterministic stubs in tests.
pub trait Segmenter {
  /// Returns the tokens of `text` in reading order, borrowing from the input.
  fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Chinese word segmenter using jieba-rs
///
/// - Accurate mode only (`cut`, never `cut_all`): each position yields the most probable split
/// - Holds a shared model, so cloning is cheap
#[derive(Clone)]
pub struct JiebaSegmenter {
  inner: Arc<Jieba>,

  /// Discover words missing from the dictionary with jieba's HMM
  hmm: bool,
}

impl JiebaSegmenter {
  /// Constructs a segmenter from a shared model (`Arc<Jieba>`).
  ///
  /// Use this with `DictionaryManager::load()`.
  ///
  /// # Examples
  /// ```rust,no_run
  /// # use herbcloud::dictionary::DictionaryManager;
  /// # use herbcloud::segmenter::{JiebaSegmenter, Segmenter};
  /// let manager = DictionaryManager::with_default();
  /// let segmenter = JiebaSegmenter::from_shared_dictionary(manager.load().unwrap(), true);
  /// let tokens = segmenter.segment("清热解毒");
  /// ```
  pub fn from_shared_dictionary(jieba: Arc<Jieba>, hmm: bool) -> Self {
    Self { inner: jieba, hmm }
  }

  /// Whether HMM discovery is enabled
  pub fn hmm(&self) -> bool {
    self.hmm
  }
}

impl Segmenter for JiebaSegmenter {
  fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
    if text.is_empty() {
      return Vec::new();
    }

    let tokens = self.inner.cut(text, self.hmm);

    debug!(
      input_text = %text,
      total_tokens = tokens.len(),
      hmm = self.hmm,
      "Segmentation completed"
    );

    tokens
  }
}

/// Token filtering
///
/// A token is counted only when it is not a stop word and has at least
/// `min_chars` characters. Length is measured in `char`s, so "清热" has length 2
/// even though it occupies 6 bytes.
pub fn should_count(token: &str, stop_words: &HashSet<String>, min_chars: usize) -> bool {
  if stop_words.contains(token) {
    return false;
  }

  token.chars().count() >= min_chars
}
