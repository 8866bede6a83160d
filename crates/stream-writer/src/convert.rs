//! Rendering of column values for the output formats.

use base64::Engine;
use serde_json::json;
use stream_core::ColumnValue;

/// Convert a column value to JSON.
///
/// Dates are formatted with their column pattern; bytes are base64 encoded.
/// Non-finite doubles become `null`.
pub fn to_json_value(value: &ColumnValue) -> serde_json::Value {
    match value {
        ColumnValue::String(s) => json!(s),
        ColumnValue::Long(i) => json!(*i),
        ColumnValue::Bool(b) => json!(*b),
        ColumnValue::Double(f) => json!(*f),
        ColumnValue::Date { .. } => json!(value.to_text()),
        ColumnValue::Bytes(b) => json!(base64::engine::general_purpose::STANDARD.encode(b)),
    }
}

/// Convert a column value to a CSV field.
pub fn to_csv_field(value: &ColumnValue) -> String {
    match value {
        ColumnValue::Bytes(b) => base64::engine::general_purpose::STANDARD.encode(b),
        other => other.to_text(),
    }
}
