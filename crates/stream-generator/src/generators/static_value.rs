//! Fixed-value columns: the configured literal parsed per type.

use crate::error::SynthesisError;
use stream_core::{ColumnType, ColumnValue, DatePattern};

/// Convert a fixed literal into a typed value.
pub fn parse_fixed(
    column_type: ColumnType,
    value: &str,
    date_format: Option<&DatePattern>,
) -> Result<ColumnValue, SynthesisError> {
    let invalid = |reason: String| SynthesisError::InvalidLiteral {
        column_type,
        value: value.to_string(),
        reason,
    };

    match column_type {
        ColumnType::String => Ok(ColumnValue::String(value.to_string())),

        ColumnType::Long => value
            .trim()
            .parse::<i64>()
            .map(ColumnValue::Long)
            .map_err(|e| invalid(e.to_string())),

        ColumnType::Double => value
            .trim()
            .parse::<f64>()
            .map(ColumnValue::Double)
            .map_err(|e| invalid(e.to_string())),

        ColumnType::Bool => Ok(ColumnValue::Bool(value.eq_ignore_ascii_case("true"))),

        ColumnType::Date => {
            let pattern = date_format.ok_or_else(|| {
                SynthesisError::Invariant("date column without a date pattern".to_string())
            })?;
            let millis = pattern.parse_millis(value).map_err(|e| {
                invalid(format!("does not match dateFormat [{}]: {e}", pattern.pattern()))
            })?;
            Ok(ColumnValue::Date {
                millis,
                pattern: pattern.clone(),
            })
        }

        ColumnType::Bytes => Ok(ColumnValue::Bytes(value.as_bytes().to_vec())),
    }
}
