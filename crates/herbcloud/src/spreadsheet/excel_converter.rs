//! Spreadsheet → JSON conversion
//!
//! Reads the first worksheet of a workbook, takes the first row as field names and
//! writes every following row as one JSON object. Blank cells become `""`.

use std::collections::HashMap;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as JsonValue};
use tracing::{debug, info};

use crate::dataset::write_json_pretty;
use crate::errors::{HerbcloudResult, SpreadsheetError};
use crate::models::Record;

/// Counters of one `convert_spreadsheet` run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
  /// Number of columns (header cells)
  pub columns: usize,
  /// Number of row objects written
  pub rows: usize,
  /// Blank or error cells replaced with `""`
  pub blank_cells_filled: usize,
  /// Rows skipped because every cell was blank
  pub empty_rows_skipped: usize,
}

/// Converts the first worksheet of `input` into a JSON array written to `output`.
///
/// The workbook format (xlsx, xlsm, xls, ods) is detected from the file extension.
///
/// # Errors
/// - `SpreadsheetError::Open`: file missing or not a readable workbook
/// - `SpreadsheetError::NoWorksheet`: workbook without sheets
/// - `SpreadsheetError::Range`: first sheet cannot be read
/// - `DatasetError::Write`: output cannot be written
pub fn convert_spreadsheet(input: &Path, output: &Path) -> HerbcloudResult<ConversionReport> {
  let mut workbook = open_workbook_auto(input).map_err(|e| SpreadsheetError::Open {
    path: input.to_path_buf(),
    reason: e.to_string(),
  })?;

  let range = workbook
    .worksheet_range_at(0)
    .ok_or_else(|| SpreadsheetError::NoWorksheet {
      path: input.to_path_buf(),
    })?
    .map_err(|e| SpreadsheetError::Range {
      path: input.to_path_buf(),
      reason: e.to_string(),
    })?;

  debug!(
    path = %input.display(),
    height = range.height(),
    width = range.width(),
    "Worksheet loaded"
  );

  // range は最初の使用セルから始まる。先頭の空列もシート上の位置どおりに残す
  let first_column = range.start().map_or(0, |(_, col)| col as usize);
  let (records, report) = rows_to_records_at(range.rows(), first_column);
  write_json_pretty(output, &records)?;

  info!(
    input = %input.display(),
    output = %output.display(),
    rows = report.rows,
    columns = report.columns,
    blank_cells_filled = report.blank_cells_filled,
    "Spreadsheet converted"
  );

  Ok(report)
}

/// Converts worksheet rows into records.
///
/// - The first row supplies field names. Blank names become `Unnamed: {index}` and
///   repeated names get `.1`, `.2`, ... suffixes.
/// - Blank and error cells become `""`, never `null` and never omitted.
/// - Rows whose cells are all blank are skipped.
pub fn rows_to_records<I, R>(rows: I) -> (Vec<Record>, ConversionReport)
where
  I: IntoIterator<Item = R>,
  R: AsRef<[Data]>,
{
  rows_to_records_at(rows, 0)
}

/// Same as [`rows_to_records`] for rows whose first cell sits in sheet column `first_column`.
///
/// The `first_column` leading columns are kept as blank columns (`Unnamed: {index}`, `""`).
pub fn rows_to_records_at<I, R>(rows: I, first_column: usize) -> (Vec<Record>, ConversionReport)
where
  I: IntoIterator<Item = R>,
  R: AsRef<[Data]>,
{
  let mut rows = rows.into_iter();
  let mut report = ConversionReport::default();

  let headers = match rows.next() {
    Some(header_row) => header_names(header_row.as_ref(), first_column),
    None => return (Vec::new(), report),
  };
  report.columns = headers.len();

  let mut records = Vec::new();
  for row in rows {
    let row = row.as_ref();

    if row.iter().all(is_blank) {
      report.empty_rows_skipped += 1;
      continue;
    }

    let mut record = Record::new();
    for (index, header) in headers.iter().enumerate() {
      let cell = index
        .checked_sub(first_column)
        .and_then(|i| row.get(i))
        .unwrap_or(&Data::Empty);
      if is_blank(cell) {
        report.blank_cells_filled += 1;
      }
      record.insert(header.clone(), cell_to_json(cell));
    }

    records.push(record);
    report.rows += 1;
  }

  (records, report)
}

/// Builds unique field names from the header row
fn header_names(row: &[Data], first_column: usize) -> Vec<String> {
  let mut seen: HashMap<String, usize> = HashMap::new();

  std::iter::repeat_n(&Data::Empty, first_column)
    .chain(row.iter())
    .enumerate()
    .map(|(index, cell)| {
      let base = if is_blank(cell) {
        format!("Unnamed: {index}")
      } else {
        cell_to_header(cell)
      };

      let occurrences = seen.entry(base.clone()).or_insert(0);
      let name = if *occurrences == 0 {
        base
      } else {
        format!("{base}.{occurrences}")
      };
      *occurrences += 1;
      name
    })
    .collect()
}

fn cell_to_header(cell: &Data) -> String {
  match cell_to_json(cell) {
    JsonValue::String(s) => s,
    other => other.to_string(),
  }
}

fn is_blank(cell: &Data) -> bool {
  match cell {
    Data::Empty | Data::Error(_) => true,
    Data::String(s) => s.is_empty(),
    _ => false,
  }
}

/// Converts one cell to JSON
///
/// Whole floats are written as integers since spreadsheets store every number as a float.
fn cell_to_json(cell: &Data) -> JsonValue {
  match cell {
    Data::Empty | Data::Error(_) => JsonValue::String(String::new()),
    Data::String(s) => JsonValue::String(s.clone()),
    Data::Int(i) => JsonValue::Number((*i).into()),
    Data::Float(f) => float_to_json(*f),
    Data::Bool(b) => JsonValue::Bool(*b),
    other => JsonValue::String(other.to_string()),
  }
}

fn float_to_json(f: f64) -> JsonValue {
  if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
    return JsonValue::Number((f as i64).into());
  }

  Number::from_f64(f)
    .map(JsonValue::Number)
    .unwrap_or_else(|| JsonValue::String(String::new()))
}
