//! CLIエラー定義

use thiserror::Error;

// herbcloud クレートのエラー型をインポート
use herbcloud::errors::{DatasetError, HerbcloudError, SpreadsheetError};

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorKind {
  /// 設定エラー（環境変数、ライブラリ設定、辞書）
  Config,
  /// 入力ファイルが無い、または読めない
  Input,
  /// 入力データの形式が不正
  Format,
  /// 出力ファイルの書き込み失敗
  Output,
}

impl CliErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Config => "config_error",
      Self::Input => "input_error",
      Self::Format => "format_error",
      Self::Output => "output_error",
    }
  }
}

/// CLIエラー
#[derive(Debug, Error)]
pub enum CliError {
  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),

  /// ライブラリ由来のエラー
  #[error(transparent)]
  Herbcloud(#[from] HerbcloudError),
}

impl CliError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> CliErrorKind {
    match self {
      Self::Config(_) => CliErrorKind::Config,
      Self::Herbcloud(err) => match err {
        HerbcloudError::Config(_) | HerbcloudError::Dictionary(_) => CliErrorKind::Config,
        HerbcloudError::Dataset(DatasetError::Read { .. })
        | HerbcloudError::Spreadsheet(SpreadsheetError::Open { .. }) => CliErrorKind::Input,
        HerbcloudError::Dataset(DatasetError::Parse { .. }) | HerbcloudError::Spreadsheet(_) => {
          CliErrorKind::Format
        }
        HerbcloudError::Dataset(_) => CliErrorKind::Output,
        // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
        _ => CliErrorKind::Format,
      },
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
  use super::*;
  use herbcloud::errors::ConfigError;
  use std::io;
  use std::path::PathBuf;
  use std::sync::Arc;

  #[test]
  fn config_creation() {
    let err = CliError::config("不明なプリセット");
    assert_eq!(err.kind(), CliErrorKind::Config);
    assert_eq!(err.code(), "config_error");
    assert!(err.to_string().contains("不明なプリセット"));
  }

  #[test]
  fn from_herbcloud_config_error() {
    let err: CliError = HerbcloudError::Config(ConfigError::EmptyTextFields).into();
    assert_eq!(err.kind(), CliErrorKind::Config);
  }

  #[test]
  fn from_herbcloud_read_error() {
    let err: CliError = HerbcloudError::Dataset(DatasetError::Read {
      path: PathBuf::from("missing.json"),
      source: Arc::new(io::Error::from(io::ErrorKind::NotFound)),
    })
    .into();
    assert_eq!(err.kind(), CliErrorKind::Input);
    assert_eq!(err.code(), "input_error");
  }

  #[test]
  fn from_herbcloud_write_error() {
    let err: CliError = HerbcloudError::Dataset(DatasetError::Write {
      path: PathBuf::from("out.json"),
      source: Arc::new(io::Error::from(io::ErrorKind::PermissionDenied)),
    })
    .into();
    assert_eq!(err.kind(), CliErrorKind::Output);
  }

  #[test]
  fn from_herbcloud_spreadsheet_error() {
    let err: CliError = HerbcloudError::Spreadsheet(SpreadsheetError::NoWorksheet {
      path: PathBuf::from("empty.xlsx"),
    })
    .into();
    assert_eq!(err.kind(), CliErrorKind::Format);
    assert_eq!(err.code(), "format_error");
  }
}
