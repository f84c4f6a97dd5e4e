//! 抽出結果のレポート型定義
//!
//! 1回の抽出処理におけるレコード数・トークン数を集計する型を定義します。

use serde::{Deserialize, Serialize};

/// `extract_with_report` の集計結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
  /// 入力レコードの総数
  pub records: usize,
  /// テキストフィールドが無い、または空だったレコード数
  pub records_without_text: usize,
  /// 分詞で得られたトークンの総数（フィルタ前）
  pub tokens_segmented: usize,
  /// フィルタを通過して集計されたトークン数
  pub tokens_kept: usize,
  /// 異なりトークン数
  pub distinct_tokens: usize,
  /// 出力したランキング件数
  pub entries: usize,
}

impl ExtractionReport {
  /// レコードを1件記録
  pub fn record_record(&mut self, has_text: bool) {
    self.records += 1;
    if !has_text {
      self.records_without_text += 1;
    }
  }

  /// 分詞結果を記録
  pub fn record_tokens(&mut self, segmented: usize, kept: usize) {
    self.tokens_segmented += segmented;
    self.tokens_kept += kept;
  }

  /// フィルタで除外されたトークン数
  pub fn tokens_filtered(&self) -> usize {
    self.tokens_segmented - self.tokens_kept
  }
}
