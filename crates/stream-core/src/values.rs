//! Typed column values and the records built from them.

use crate::date_format::DatePattern;
use crate::types::ColumnType;

/// One synthesized column value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    /// String value
    String(String),

    /// 64-bit signed integer
    Long(i64),

    /// Boolean value
    Bool(bool),

    /// 64-bit floating point
    Double(f64),

    /// Instant in epoch milliseconds, rendered with the column's pattern
    Date { millis: i64, pattern: DatePattern },

    /// Raw bytes
    Bytes(Vec<u8>),
}

impl ColumnValue {
    /// The column type this value belongs to.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::String(_) => ColumnType::String,
            Self::Long(_) => ColumnType::Long,
            Self::Bool(_) => ColumnType::Bool,
            Self::Double(_) => ColumnType::Double,
            Self::Date { .. } => ColumnType::Date,
            Self::Bytes(_) => ColumnType::Bytes,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Long(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as epoch milliseconds.
    pub fn as_millis(&self) -> Option<i64> {
        match self {
            Self::Date { millis, .. } => Some(*millis),
            _ => None,
        }
    }

    /// Try to get this value as a byte slice.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Render the value as display text.
    ///
    /// Dates use their pattern; bytes are decoded lossily as UTF-8.
    pub fn to_text(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Long(i) => i.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Double(f) => f.to_string(),
            Self::Date { millis, pattern } => pattern
                .format_millis(*millis)
                .unwrap_or_else(|| millis.to_string()),
            Self::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
        }
    }
}

/// One emitted row: column values in declared order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    columns: Vec<ColumnValue>,
}

impl Record {
    /// Create an empty record with room for `capacity` columns.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: Vec::with_capacity(capacity),
        }
    }

    /// Append a column value.
    pub fn add_column(&mut self, value: ColumnValue) {
        self.columns.push(value);
    }

    /// Get a column by position.
    pub fn get(&self, index: usize) -> Option<&ColumnValue> {
        self.columns.get(index)
    }

    /// All column values in order.
    pub fn columns(&self) -> &[ColumnValue] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl From<Vec<ColumnValue>> for Record {
    fn from(columns: Vec<ColumnValue>) -> Self {
        Self { columns }
    }
}
