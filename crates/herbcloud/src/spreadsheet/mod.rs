//! spreadsheet モジュール
//!
//! スプレッドシートを JSON レコード配列へ変換します。

pub mod excel_converter;

/// 再エクスポート
pub use excel_converter::{ConversionReport, convert_spreadsheet, rows_to_records, rows_to_records_at};
