//! segmenter モジュール
pub mod jieba_segmenter;

/// 再エクスポート
pub use jieba_segmenter::{JiebaSegmenter, Segmenter, should_count};
