//! JSON データセットの読み書き
//!
//! 入力: オブジェクトの JSON 配列（UTF-8）
//! 出力: インデント 2 の整形済み JSON（非 ASCII 文字はエスケープしない）

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::errors::DatasetError;
use crate::models::Record;

/// レコード配列を JSON ファイルから読み込む
///
/// # エラー
/// - ファイルが存在しない／読めない: `DatasetError::Read`
/// - JSON 不正、配列でない、要素がオブジェクトでない: `DatasetError::Parse`
pub fn load_records(path: &Path) -> Result<Vec<Record>, DatasetError> {
  let content = fs::read_to_string(path).map_err(|e| DatasetError::Read {
    path: path.to_path_buf(),
    source: Arc::new(e),
  })?;

  let records: Vec<Record> = serde_json::from_str(&content).map_err(|e| DatasetError::Parse {
    path: path.to_path_buf(),
    source: Arc::new(e),
  })?;

  debug!(path = %path.display(), records = records.len(), "Records loaded");
  Ok(records)
}

/// 値を整形済み JSON としてファイルへ書き込む
///
/// `serde_json::to_string_pretty` はインデント 2 で、非 ASCII 文字をそのまま出力する。
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), DatasetError> {
  let json = serde_json::to_string_pretty(value).map_err(|e| DatasetError::Serialize {
    path: path.to_path_buf(),
    source: Arc::new(e),
  })?;

  fs::write(path, json).map_err(|e| DatasetError::Write {
    path: path.to_path_buf(),
    source: Arc::new(e),
  })?;

  debug!(path = %path.display(), "JSON written");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::RankedEntry;
  use serde_json::json;
  use tempfile::TempDir;

  #[test]
  fn load_records_reads_array_of_objects() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("herbs.json");
    fs::write(&path, r#"[{"name": "人参", "effects": "大补元气"}, {}]"#).unwrap();

    let records = load_records(&path).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["effects"], json!("大补元气"));
    assert!(records[1].is_empty());
  }

  #[test]
  fn load_records_missing_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    let err = load_records(&path).unwrap_err();
    match err {
      DatasetError::Read { path: p, .. } => assert_eq!(p, path),
      other => panic!("expected Read error, got {:?}", other),
    }
  }

  #[test]
  fn load_records_malformed_json_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "[{\"effects\": ").unwrap();

    assert!(matches!(
      load_records(&path),
      Err(DatasetError::Parse { .. })
    ));
  }

  #[test]
  fn load_records_rejects_non_object_elements() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("numbers.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    assert!(matches!(
      load_records(&path),
      Err(DatasetError::Parse { .. })
    ));
  }

  #[test]
  fn write_json_pretty_keeps_chinese_and_indents_two_spaces() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.json");

    write_json_pretty(&path, &[RankedEntry::new("清热", 2)]).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
      written,
      "[\n  {\n    \"name\": \"清热\",\n    \"value\": 2\n  }\n]"
    );
  }

  #[test]
  fn write_json_pretty_into_missing_directory_is_write_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no-such-dir").join("out.json");

    let err = write_json_pretty(&path, &Vec::<RankedEntry>::new()).unwrap_err();
    assert!(matches!(err, DatasetError::Write { .. }));
  }
}
