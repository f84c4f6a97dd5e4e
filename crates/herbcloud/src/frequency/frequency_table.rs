//! 出現頻度テーブル
//!
//! トークンごとの出現回数を「初出順」を保ったまま集計します。

use std::collections::HashMap;

use crate::models::RankedEntry;

/// トークン → 出現回数 の集計表
///
/// 同数のトークンは初めて出現した順に並ぶ。
/// ランキングは安定ソートで作るため、この順序がそのまま同順位の並びになる。
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
  /// (トークン, 回数) を初出順に保持
  entries: Vec<(String, usize)>,
  /// トークン → `entries` 内の位置
  positions: HashMap<String, usize>,
}

impl FrequencyTable {
  /// 空のテーブルを作成
  pub fn new() -> Self {
    Self::default()
  }

  /// トークンの出現を1回記録
  pub fn record(&mut self, token: &str) {
    match self.positions.get(token) {
      Some(&pos) => self.entries[pos].1 += 1,
      None => {
        self.positions.insert(token.to_string(), self.entries.len());
        self.entries.push((token.to_string(), 1));
      }
    }
  }

  /// トークンの出現回数（未出現なら 0）
  #[cfg(test)]
  pub fn count(&self, token: &str) -> usize {
    self.positions.get(token).map(|&pos| self.entries[pos].1).unwrap_or(0)
  }

  /// 異なりトークン数
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// 空かどうか
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// 初出順のイテレーター
  #[cfg(test)]
  pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
    self.entries.iter().map(|(token, count)| (token.as_str(), *count))
  }

  /// 回数の降順で上位 `top_n` 件を取り出す
  ///
  /// 同数の場合は初出順（安定ソート）。テーブルは消費される。
  pub fn into_ranked(self, top_n: usize) -> Vec<RankedEntry> {
    let mut entries = self.entries;
    // sort_by は安定ソート
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    entries
      .into_iter()
      .take(top_n)
      .map(|(name, value)| RankedEntry { name, value })
      .collect()
  }
}

impl<'a> Extend<&'a str> for FrequencyTable {
  fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
    for token in iter {
      self.record(token);
    }
  }
}
