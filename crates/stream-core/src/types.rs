//! Column type tags.

use crate::error::ConfigError;
use std::fmt;

/// The closed set of column types a job may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    String,
    Long,
    Bool,
    Double,
    Date,
    Bytes,
}

impl ColumnType {
    /// All supported types, in declaration order.
    pub const ALL: [ColumnType; 6] = [
        ColumnType::String,
        ColumnType::Long,
        ColumnType::Bool,
        ColumnType::Double,
        ColumnType::Date,
        ColumnType::Bytes,
    ];

    /// Resolve a configured type name.
    ///
    /// Matching is case-insensitive. A missing or blank name means `string`.
    pub fn parse(name: Option<&str>) -> Result<Self, ConfigError> {
        let name = match name.map(str::trim) {
            None | Some("") => return Ok(ColumnType::String),
            Some(name) => name,
        };

        Self::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnsupportedType(name.to_string()))
    }

    /// Lower-case configuration name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Long => "long",
            ColumnType::Bool => "bool",
            ColumnType::Double => "double",
            ColumnType::Date => "date",
            ColumnType::Bytes => "bytes",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
