// crates/herbcloud/src/service.rs

//! WordCloudService: 単語頻度抽出の統合ファサード。
//!
//! - 辞書管理 (DictionaryManager)
//! - 分詞 (JiebaSegmenter)
//! - 頻度集計 (WordFrequencyExtractor)
//! - JSON 入出力 (dataset)
//!
//! 前処理スクリプトからは、この構造体だけを意識すればよい。

use std::path::Path;

use tracing::info;

use crate::config::HerbcloudConfig;
use crate::dataset::{load_records, write_json_pretty};
use crate::dictionary::DictionaryManager;
use crate::errors::error_definition::HerbcloudResult;
use crate::frequency::WordFrequencyExtractor;
use crate::models::{RankedEntry, Record};
use crate::segmenter::JiebaSegmenter;

/// herbcloud の単語頻度抽出ファサード。
pub struct WordCloudService {
  /// 辞書マネージャ
  dictionary_manager: DictionaryManager,

  /// 抽出器（jieba 分詞）
  extractor: WordFrequencyExtractor<JiebaSegmenter>,
}

impl WordCloudService {
  /// 初期化（設定検証 + 辞書ロード + 抽出器構築）
  ///
  /// # 処理フロー
  /// 1. 設定の妥当性を検証
  /// 2. DictionaryManager を構築し、分詞モデルをロード
  /// 3. WordFrequencyExtractor を構築
  ///
  /// # エラー
  /// - 設定が不正（top_n が 0、text_fields が空等）
  /// - ユーザー辞書が見つからない、または不正
  pub fn init(config: &HerbcloudConfig) -> HerbcloudResult<Self> {
    // ConfigError は #[from] で HerbcloudError に自動変換
    config.validate()?;

    let dictionary_manager = match config.user_dictionary() {
      Some(path) => DictionaryManager::with_user_dictionary(path)?,
      None => DictionaryManager::with_default(),
    };

    let jieba = dictionary_manager.load()?;
    let segmenter = JiebaSegmenter::from_shared_dictionary(jieba, config.extractor().hmm);
    let extractor = WordFrequencyExtractor::new(segmenter, config.extractor())?;

    Ok(Self {
      dictionary_manager,
      extractor,
    })
  }

  /// メモリ上のレコードからランキングを作成する（ファイル入出力なし）。
  pub fn extract(&self, records: &[Record]) -> Vec<RankedEntry> {
    self.extractor.extract(records)
  }

  /// 入力 JSON を読み込み、ランキングを整形済み JSON で書き出す。
  ///
  /// # 引数
  /// - `input`: レコード配列の JSON ファイル
  /// - `output`: `[{"name", "value"}]` の書き出し先
  ///
  /// # エラー
  /// - 入力ファイルが無い／読めない
  /// - 入力 JSON が不正
  /// - 出力ファイルの書き込み失敗
  pub fn run(&self, input: &Path, output: &Path) -> HerbcloudResult<Vec<RankedEntry>> {
    let records = load_records(input)?;
    let (ranked, report) = self.extractor.extract_with_report(&records);

    write_json_pretty(output, &ranked)?;

    info!(
      input = %input.display(),
      output = %output.display(),
      words = ranked.len(),
      records_without_text = report.records_without_text,
      "処理完成，共生成{}个词",
      ranked.len()
    );

    Ok(ranked)
  }

  // ===== アクセサ =====

  /// 内部の DictionaryManager への参照を返す。
  pub fn dictionary_manager(&self) -> &DictionaryManager {
    &self.dictionary_manager
  }

  /// 内部の抽出器への参照を返す。
  pub fn extractor(&self) -> &WordFrequencyExtractor<JiebaSegmenter> {
    &self.extractor
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// テストモジュール
// ─────────────────────────────────────────────────────────────────────────────
