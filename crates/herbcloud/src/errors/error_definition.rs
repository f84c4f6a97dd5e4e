//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// 設定（HerbcloudConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// extractor.top_n < 1
  #[error("extractor.top_n は 1 以上である必要があります: actual={actual}")]
  InvalidTopN {
    /// 実際に指定された値
    actual: usize,
  },

  /// extractor.min_token_chars < 1
  #[error("extractor.min_token_chars は 1 以上である必要があります: actual={actual}")]
  InvalidMinTokenChars {
    /// 実際に指定された値
    actual: usize,
  },

  /// extractor.text_fields が空
  #[error("text_fields に少なくとも1つのフィールド名を指定してください")]
  EmptyTextFields,
}

/// 分詞辞書関連のエラー
/// jieba の同梱辞書に加えてユーザー辞書を読み込める
/// これらのエラーを定義する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// 指定されたユーザー辞書が見つからない
  #[error("指定された辞書が見つかりません: {0}")]
  DictionaryNotFound(String),

  /// ユーザー辞書ファイルのオープン失敗
  #[error("辞書ファイルを開けませんでした: path={path:?}, error={source}")]
  Io {
    /// 対象パス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// jieba による辞書のロード失敗（不正な辞書エントリ等）
  #[error("jieba 辞書ロードエラー: {0}")]
  Load(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// JSON データセットの入出力エラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DatasetError {
  /// 入力ファイルが存在しない、または読み込めない
  #[error("入力ファイルを読み込めませんでした: path={path:?}, error={source}")]
  Read {
    /// 対象パス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// JSON として解析できない（配列でない、要素がオブジェクトでない等）
  #[error("JSON の解析に失敗しました: path={path:?}, error={source}")]
  Parse {
    /// 対象パス
    path: PathBuf,
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },

  /// 出力データのシリアライズ失敗
  #[error("JSON のシリアライズに失敗しました: path={path:?}, error={source}")]
  Serialize {
    /// 出力先パス
    path: PathBuf,
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },

  /// 出力ファイルの書き込み失敗
  #[error("出力ファイルの書き込みに失敗しました: path={path:?}, error={source}")]
  Write {
    /// 出力先パス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },
}

/// スプレッドシート変換関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum SpreadsheetError {
  /// ワークブックを開けない（存在しない、形式不明、破損等）
  #[error("スプレッドシートを開けませんでした: path={path:?}, reason={reason}")]
  Open {
    /// 対象パス
    path: PathBuf,
    /// calamine が返した理由
    reason: String,
  },

  /// ワークシートが1枚も無い
  #[error("ワークシートが見つかりません: path={path:?}")]
  NoWorksheet {
    /// 対象パス
    path: PathBuf,
  },

  /// ワークシートのセル範囲を読み込めない
  #[error("ワークシートの読み込みに失敗しました: path={path:?}, reason={reason}")]
  Range {
    /// 対象パス
    path: PathBuf,
    /// calamine が返した理由
    reason: String,
  },
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `HerbcloudResult<T>` = `Result<T, HerbcloudError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum HerbcloudError {
  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// 辞書関連エラー
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// データセット入出力エラー
  #[error(transparent)]
  Dataset(#[from] DatasetError),

  /// スプレッドシート変換エラー
  #[error(transparent)]
  Spreadsheet(#[from] SpreadsheetError),
}

/// herbcloud クレートの標準 Result 型エイリアス
pub type HerbcloudResult<T> = Result<T, HerbcloudError>;
