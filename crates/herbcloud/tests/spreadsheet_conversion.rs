//! crates/herbcloud/tests/spreadsheet_conversion.rs
//!
//! Workbook → JSON conversion against real xlsx files under `tests/fixtures/`.
//! Open workbook -> read first sheet -> build records -> write JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

use herbcloud::models::Record;
use herbcloud::spreadsheet::convert_spreadsheet;

fn fixture(name: &str) -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn read_output(path: &Path) -> Vec<Record> {
  let text = fs::read_to_string(path).expect("output must exist");
  serde_json::from_str(&text).expect("output must be a JSON array of objects")
}

// =============================================================================
// blank cells
// =============================================================================

#[test]
fn blank_cell_is_written_as_empty_string() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let output = temp_dir.path().join("herbal_detailed_data.json");

  let report = convert_spreadsheet(&fixture("herbs_blank_cell.xlsx"), &output)
    .expect("conversion should succeed");

  let records = read_output(&output);
  assert_eq!(records.len(), 3);
  assert_eq!(report.rows, 3);
  assert_eq!(report.columns, 4);
  assert_eq!(report.blank_cells_filled, 1);

  // 甘草 の effects セルは空
  assert_eq!(records[1]["name"], json!("甘草"));
  assert_eq!(records[1]["effects"], json!(""));
  assert_eq!(records[1].len(), 4, "blank cells must not be omitted");
}

#[test]
fn column_order_and_cell_types_follow_the_sheet() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let output = temp_dir.path().join("out.json");

  convert_spreadsheet(&fixture("herbs_blank_cell.xlsx"), &output)
    .expect("conversion should succeed");

  let records = read_output(&output);
  for record in &records {
    let keys: Vec<&str> = record.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["name", "effects", "origin", "grade"]);
  }

  assert_eq!(
    serde_json::Value::Object(records[0].clone()),
    json!({"name": "人参", "effects": "大补元气", "origin": "吉林", "grade": 1})
  );
  assert_eq!(records[2]["grade"], json!(0.5));
}

#[test]
fn output_is_pretty_printed_utf8() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let output = temp_dir.path().join("out.json");

  convert_spreadsheet(&fixture("herbs_blank_cell.xlsx"), &output)
    .expect("conversion should succeed");

  let text = fs::read_to_string(&output).unwrap();
  assert!(text.starts_with("[\n  {\n    \"name\": \"人参\","));
  assert!(text.contains("\"effects\": \"\""));
}

// =============================================================================
// sheet layout
// =============================================================================

#[test]
fn leading_blank_column_is_kept() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let output = temp_dir.path().join("out.json");

  let report = convert_spreadsheet(&fixture("leading_blank_column.xlsx"), &output)
    .expect("conversion should succeed");

  let records = read_output(&output);
  assert_eq!(records.len(), 1);
  assert_eq!(report.columns, 3);

  let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
  assert_eq!(keys, vec!["Unnamed: 0", "name", "effects"]);
  assert_eq!(records[0]["Unnamed: 0"], json!(""));
  assert_eq!(records[0]["name"], json!("人参"));
}
