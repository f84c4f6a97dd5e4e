//! 設定の定数定義
//!
//! パスはいずれもスクリプト実行ディレクトリ（`scripts/`）からの相対パス。

/// ワードクラウド前処理の入力（詳細薬材データ）
pub const DEFAULT_WORDCLOUD_INPUT: &str = "../public/data/herbal_detailed_data.json";

/// ワードクラウド前処理の出力
pub const DEFAULT_WORDCLOUD_OUTPUT: &str = "../public/data/wordcloud_data.json";

/// デフォルトのスプレッドシート変換プリセット名
pub const DEFAULT_SHEET_PRESET: &str = "detailed-herbs";

/// デフォルトのログレベル
pub const DEFAULT_LOG_LEVEL: &str = "info";
