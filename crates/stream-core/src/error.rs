//! Error types for configuration loading and validation.

use thiserror::Error;

/// Category of a configuration error.
///
/// Every [`ConfigError`] maps onto exactly one kind, which is what callers
/// should match on when they only care about the class of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingRequiredValue,
    InvalidRowCount,
    UnsupportedType,
    InvalidMixupSyntax,
    EmptyMixupParams,
    NegativeMixupParam,
    InvertedMixupRange,
    DateParseMismatch,
}

/// A configuration error, raised before any record is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A required parameter is absent or blank
    #[error("missing required parameter [{0}]")]
    MissingRequiredValue(String),

    /// `sliceRecordCount` is not an integer >= 1
    #[error("parameter [sliceRecordCount] must be an integer >= 1, got `{0}`")]
    InvalidRowCount(String),

    /// Column type outside the supported set
    #[error("unsupported column type [{0}], expected one of: string, long, bool, double, date, bytes")]
    UnsupportedType(String),

    /// Mixup expression does not follow `random <p1>, <p2>`
    #[error("invalid random mixup `{expr}`: {reason}")]
    InvalidMixupSyntax { expr: String, reason: String },

    /// Both mixup parameters are blank
    #[error("invalid random mixup `{expr}`: parameters must not be empty")]
    EmptyMixupParams { expr: String },

    /// A mixup parameter resolved to a negative bound
    #[error("invalid random mixup `{expr}`: parameters must not be negative ({param1}, {param2})")]
    NegativeMixupParam {
        expr: String,
        param1: String,
        param2: String,
    },

    /// First mixup parameter is greater than the second
    #[error(
        "invalid random mixup `{expr}`: first parameter must be less than or equal to the second ({param1}, {param2})"
    )]
    InvertedMixupRange {
        expr: String,
        param1: String,
        param2: String,
    },

    /// Date pattern is unusable or does not match a configured date
    #[error("dateFormat [{format}] cannot parse `{input}`: {reason}")]
    DateParseMismatch {
        format: String,
        input: String,
        reason: String,
    },

    /// A column failed to parse; wraps the underlying cause
    #[error("failed to parse column #{index} {fragment}: {source}")]
    Column {
        index: usize,
        fragment: String,
        #[source]
        source: Box<ConfigError>,
    },
}

impl ConfigError {
    /// The category of this error.
    ///
    /// A wrapped column failure reports [`ErrorKind::InvalidMixupSyntax`];
    /// use [`ConfigError::root_cause`] to reach the specific violation.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::MissingRequiredValue(_) => ErrorKind::MissingRequiredValue,
            ConfigError::InvalidRowCount(_) => ErrorKind::InvalidRowCount,
            ConfigError::UnsupportedType(_) => ErrorKind::UnsupportedType,
            ConfigError::InvalidMixupSyntax { .. } => ErrorKind::InvalidMixupSyntax,
            ConfigError::EmptyMixupParams { .. } => ErrorKind::EmptyMixupParams,
            ConfigError::NegativeMixupParam { .. } => ErrorKind::NegativeMixupParam,
            ConfigError::InvertedMixupRange { .. } => ErrorKind::InvertedMixupRange,
            ConfigError::DateParseMismatch { .. } => ErrorKind::DateParseMismatch,
            ConfigError::Column { .. } => ErrorKind::InvalidMixupSyntax,
        }
    }

    /// The innermost error, unwrapping any column context.
    pub fn root_cause(&self) -> &ConfigError {
        match self {
            ConfigError::Column { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Error type for reading a job configuration document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Error reading the configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_error_kind_and_root_cause() {
        let err = ConfigError::Column {
            index: 2,
            fragment: r#"{"type":"enum"}"#.to_string(),
            source: Box::new(ConfigError::UnsupportedType("enum".to_string())),
        };

        assert_eq!(err.kind(), ErrorKind::InvalidMixupSyntax);
        assert_eq!(err.root_cause().kind(), ErrorKind::UnsupportedType);

        let message = err.to_string();
        assert!(message.contains("#2"));
        assert!(message.contains(r#"{"type":"enum"}"#));
        assert!(message.contains("unsupported column type [enum]"));
    }

    #[test]
    fn test_messages_carry_fragment_and_constraint() {
        let err = ConfigError::InvertedMixupRange {
            expr: "random 10, 2".to_string(),
            param1: "10".to_string(),
            param2: "2".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("random 10, 2"));
        assert!(message.contains("less than or equal"));
    }
}
