//! herbcloud 単語頻度抽出ライブラリー
//!
//! jieba を用いて本草データの功效テキストを分詞し、ワードクラウド用の頻度ランキングを作成する。
//! スプレッドシートから JSON レコード配列への変換も提供する。

/// 設定モジュール - HerbcloudConfig, ExtractorConfig 等の設定構造体を定義
pub mod config;

/// データセットモジュール - JSON レコード配列の読み込みと整形出力
pub mod dataset;

/// 辞書モジュール - jieba 分詞モデルの構築・キャッシュ
pub mod dictionary;

/// エラーモジュール - HerbcloudError, HerbcloudResult 等のエラー型を定義
pub mod errors;

/// 頻度モジュール - 頻度集計とランキング作成
pub mod frequency;

/// データモデルモジュール - Record, RankedEntry 等のデータ構造を定義
pub mod models;

/// 分詞モジュール - Segmenter トレイトと jieba 実装
pub mod segmenter;

/// サービスモジュール - WordCloudService 等の上位レベルAPIを提供
pub mod service;

/// スプレッドシートモジュール - スプレッドシート → JSON 変換
pub mod spreadsheet;

/// 再エクスポート
pub use config::HerbcloudConfig;
pub use errors::{HerbcloudError, HerbcloudResult};
pub use frequency::WordFrequencyExtractor;
pub use models::{RankedEntry, Record};
pub use service::WordCloudService;
pub use spreadsheet::convert_spreadsheet;
