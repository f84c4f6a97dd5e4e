//! Data Model Definition
use serde::{Deserialize, Serialize};
use serde_json::Map;
use serde_json::Value as JsonValue;

/// One catalogue entry (e.g. one herb) as read from the input JSON array.
///
/// Field order is preserved so converted spreadsheet rows keep their column order.
pub type Record = Map<String, JsonValue>;

/// One entry of the word cloud: a token and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
  /// Token text
  pub name: String,

  /// Occurrence count across all records
  pub value: usize,
}

impl RankedEntry {
  /// Constructor for RankedEntry
  pub fn new(name: impl Into<String>, value: usize) -> Self {
    Self {
      name: name.into(),
      value,
    }
  }
}

/// Resolves the text of a record from an ordered list of candidate fields.
///
/// # Behavior
///
/// - Candidates are checked in order; the first one yielding non-empty text wins.
/// - A missing or `null` field, or one resolving to `""`, falls through to the next candidate.
/// - When no candidate yields text, returns an empty string (never an error).
///
/// # Examples
///
/// ```
/// use herbcloud::models::resolve_text;
/// use serde_json::json;
///
/// let record = json!({"effects": "", "effect": "清热解毒"});
/// let text = resolve_text(record.as_object().unwrap(), &["effects", "effect"]);
/// assert_eq!(text, "清热解毒");
/// ```
pub fn resolve_text<S: AsRef<str>>(record: &Record, fields: &[S]) -> String {
  fields
    .iter()
    .filter_map(|field| record.get(field.as_ref()))
    .map(value_to_text)
    .find(|text| !text.is_empty())
    .unwrap_or_default()
}

/// Converts one field value to text.
///
/// - String: as-is
/// - Array: string elements concatenated with no separator (non-strings are ignored)
/// - Anything else: empty
fn value_to_text(value: &JsonValue) -> String {
  match value {
    JsonValue::String(s) => s.clone(),
    JsonValue::Array(items) => items.iter().filter_map(JsonValue::as_str).collect(),
    _ => String::new(),
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
