//! frequency モジュール
//!
//! 分詞結果の集計とランキング作成を担当します。

pub mod extractor;
pub mod frequency_table;
pub mod report;

/// 主要な型を再エクスポート
pub use extractor::WordFrequencyExtractor;
pub use frequency_table::FrequencyTable;
pub use report::ExtractionReport;
