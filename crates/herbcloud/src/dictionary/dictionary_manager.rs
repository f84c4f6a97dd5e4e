//! Dictionary Management Module
//!
//! Builds the jieba segmentation model once per run and shares it through `Arc`.
//! The bundled dictionary is always loaded; a user dictionary can be layered on top
//! to teach the segmenter herb names and compound effect terms.

use crate::errors::error_definition::DictionaryError;
use jieba_rs::Jieba;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Dictionary manager structure for jieba
pub struct DictionaryManager {
  /// User dictionary file path (`None` when only the bundled dictionary is used)
  user_dictionary: Option<PathBuf>,

  /// Cache of the loaded model (Initialized only once at the first load)
  /// Held in Arc for sharing
  /// DictionaryError implements Clone so it can hold Result
  jieba: OnceLock<Result<Arc<Jieba>, DictionaryError>>,
}

impl DictionaryManager {
  /// Constructor using jieba's bundled dictionary only
  pub fn with_default() -> Self {
    Self {
      user_dictionary: None,
      jieba: OnceLock::new(),
    }
  }

  /// Constructor that additionally loads a user dictionary file
  pub fn with_user_dictionary<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
      return Err(DictionaryError::DictionaryNotFound(
        path.display().to_string(),
      ));
    }

    Ok(Self {
      user_dictionary: Some(path),
      jieba: OnceLock::new(),
    })
  }

  /// Returns the user dictionary path, if any
  pub fn user_dictionary(&self) -> Option<&Path> {
    self.user_dictionary.as_deref()
  }

  /// Load the segmentation model
  /// - Builds the model on the first call
  /// - Returns a clone of `Arc<Jieba>` from the second call onwards
  /// - If an error occurs on the first call, caches the error and keeps returning it
  pub fn load(&self) -> Result<Arc<Jieba>, DictionaryError> {
    self.jieba.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  fn load_inner(&self) -> Result<Jieba, DictionaryError> {
    let mut jieba = Jieba::new();

    if let Some(path) = &self.user_dictionary {
      let file = File::open(path).map_err(|e| DictionaryError::Io {
        path: path.clone(),
        source: Arc::new(e),
      })?;
      let mut reader = BufReader::new(file);
      jieba.load_dict(&mut reader).map_err(|e| DictionaryError::Load(Arc::new(e)))?;
      debug!(path = %path.display(), "User dictionary loaded");
    }

    Ok(jieba)
  }
}

impl Default for DictionaryManager {
  fn default() -> Self {
    Self::with_default()
  }
}

/// Manual `Debug` implementation for `DictionaryManager`
///
/// `jieba_rs::Jieba` holds the whole prefix dictionary, so only meta information is shown.
impl fmt::Debug for DictionaryManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryManager")
      .field("user_dictionary", &self.user_dictionary)
      .field("dictionary_initialized", &self.jieba.get().is_some())
      .finish()
  }
}
