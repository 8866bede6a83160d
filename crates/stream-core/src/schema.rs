//! Job schema: raw configuration, validated column descriptors and splitting.
//!
//! ## Type Hierarchy
//!
//! **Raw types** (as written in the job file, unvalidated):
//! - `RawColumn` - one column entry (`type`, `value`, `random`, `dateFormat`)
//! - `RawJobConfig` - the column list plus `sliceRecordCount`
//!
//! **Validated types** (immutable once built):
//! - `ColumnDescriptor` - resolved type, mode and date pattern
//! - `JobSpec` - ordered descriptors, row count and the random-column marker
//!
//! `validate` turns the former into the latter; `JobSpec::split` hands out
//! one independent copy per parallel task.

use crate::date_format::{DatePattern, DEFAULT_DATE_FORMAT};
use crate::error::{ConfigError, LoadError};
use crate::mixup::parse_mixup;
use crate::types::ColumnType;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

// ============================================================================
// Raw Types
// ============================================================================

/// One column as configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawColumn {
    /// Type name, case-insensitive; blank means `string`
    #[serde(
        default,
        rename = "type",
        skip_serializing_if = "Option::is_none"
    )]
    pub column_type: Option<String>,

    /// Fixed literal; scalars of any kind are accepted and stringified
    #[serde(
        default,
        deserialize_with = "deserialize_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<String>,

    /// Mixup expression, `random <p1>, <p2>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random: Option<String>,

    /// Java-style date pattern for `date` columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl RawColumn {
    /// Fixed-value column.
    pub fn fixed(column_type: &str, value: impl Into<String>) -> Self {
        Self {
            column_type: Some(column_type.to_string()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Random (mixup) column.
    pub fn random(column_type: &str, expr: impl Into<String>) -> Self {
        Self {
            column_type: Some(column_type.to_string()),
            random: Some(expr.into()),
            ..Self::default()
        }
    }

    /// Set the date pattern.
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = Some(date_format.into());
        self
    }

    /// Compact JSON rendering, used to quote the column in error messages.
    pub fn fragment(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

/// `sliceRecordCount` as written: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRowCount {
    Integer(i64),
    Text(String),
}

/// The reader's job configuration.
///
/// Unknown keys are ignored so the document can be embedded in larger job files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawJobConfig {
    /// Ordered column list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<Vec<RawColumn>>,

    /// Rows to emit per task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slice_record_count: Option<RawRowCount>,
}

impl RawJobConfig {
    /// Create a configuration from columns and a row count.
    pub fn new(column: Vec<RawColumn>, slice_record_count: i64) -> Self {
        Self {
            column: Some(column),
            slice_record_count: Some(RawRowCount::Integer(slice_record_count)),
        }
    }

    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file; `.yaml`/`.yml` is read as YAML, anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::from_yaml(&content)
            }
            _ => Self::from_json(&content),
        }
    }
}

/// Stringify a scalar `value`.
///
/// Floats are normalised through `f64`, so `1.0` stays `1.0` but `2.50`
/// becomes `2.5`. Quote the value to keep its exact text.
fn deserialize_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Bool(bool),
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Bool(b) => b.to_string(),
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) => format!("{f:?}"),
        Scalar::Text(s) => s,
    }))
}

// ============================================================================
// Validated Types
// ============================================================================

/// How a column produces its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnMode {
    /// The configured literal, parsed per type
    Fixed(String),

    /// Uniform draw from `[low, high]`; epoch milliseconds for dates
    Random { low: i64, high: i64 },
}

/// A validated column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub column_type: ColumnType,
    pub mode: ColumnMode,
    /// Present iff `column_type` is `Date`
    pub date_format: Option<DatePattern>,
}

impl ColumnDescriptor {
    /// Whether this column draws random values.
    pub fn is_random(&self) -> bool {
        matches!(self.mode, ColumnMode::Random { .. })
    }

    /// Resolved random bounds, if any.
    pub fn range(&self) -> Option<(i64, i64)> {
        match self.mode {
            ColumnMode::Random { low, high } => Some((low, high)),
            ColumnMode::Fixed(_) => None,
        }
    }
}

/// A validated job, owned by exactly one task after splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    /// Column descriptors in declared order
    pub columns: Vec<ColumnDescriptor>,

    /// Rows to emit per task, at least 1
    pub row_count: u64,

    /// True iff any column is in random mode
    pub has_any_random_column: bool,
}

impl JobSpec {
    /// Produce `n` independent copies, one per parallel task.
    pub fn split(&self, n: usize) -> Vec<JobSpec> {
        vec![self.clone(); n]
    }
}

// ============================================================================
// Parsing and Validation
// ============================================================================

/// Parse one column into a descriptor.
pub fn parse_column(raw: &RawColumn) -> Result<ColumnDescriptor, ConfigError> {
    let column_type = ColumnType::parse(raw.column_type.as_deref())?;

    let date_format = if column_type == ColumnType::Date {
        let pattern = non_blank(&raw.date_format).unwrap_or(DEFAULT_DATE_FORMAT);
        let parsed =
            DatePattern::new(pattern).map_err(|reason| ConfigError::DateParseMismatch {
                format: pattern.to_string(),
                input: pattern.to_string(),
                reason,
            })?;
        Some(parsed)
    } else {
        None
    };

    let value = non_blank(&raw.value);
    let random = non_blank(&raw.random);

    let mode = match (value, random) {
        (None, None) => return Err(ConfigError::MissingRequiredValue("value".to_string())),
        (Some(value), Some(random)) => {
            warn!(
                "Column configures both a constant (value: {}) and a mixup (random: {}); the constant takes precedence",
                value, random
            );
            ColumnMode::Fixed(raw.value.clone().unwrap_or_default())
        }
        (Some(_), None) => ColumnMode::Fixed(raw.value.clone().unwrap_or_default()),
        (None, Some(expr)) => parse_random(column_type, date_format.as_ref(), expr)?,
    };

    debug!("Resolved {} column: {:?}", column_type, mode);

    Ok(ColumnDescriptor {
        column_type,
        mode,
        date_format,
    })
}

fn parse_random(
    column_type: ColumnType,
    date_format: Option<&DatePattern>,
    expr: &str,
) -> Result<ColumnMode, ConfigError> {
    let params = parse_mixup(expr)?;
    if params.is_empty() {
        return Err(ConfigError::EmptyMixupParams {
            expr: expr.to_string(),
        });
    }

    let (low, high) = match date_format {
        Some(pattern) => (
            parse_date_param(pattern, &params.param1)?,
            parse_date_param(pattern, &params.param2)?,
        ),
        None => (
            parse_int_param(expr, &params.param1)?,
            parse_int_param(expr, &params.param2)?,
        ),
    };

    if low < 0 || high < 0 {
        return Err(ConfigError::NegativeMixupParam {
            expr: expr.to_string(),
            param1: params.param1,
            param2: params.param2,
        });
    }

    // bool bounds are a false:true ratio, not an interval
    if column_type != ColumnType::Bool && low > high {
        return Err(ConfigError::InvertedMixupRange {
            expr: expr.to_string(),
            param1: params.param1,
            param2: params.param2,
        });
    }

    Ok(ColumnMode::Random { low, high })
}

/// Non-date bounds are 32-bit integers; they size strings and byte arrays.
fn parse_int_param(expr: &str, param: &str) -> Result<i64, ConfigError> {
    param
        .trim()
        .parse::<i32>()
        .map(i64::from)
        .map_err(|e| ConfigError::InvalidMixupSyntax {
            expr: expr.to_string(),
            reason: format!("parameter `{param}` is not a 32-bit integer ({e})"),
        })
}

fn parse_date_param(pattern: &DatePattern, param: &str) -> Result<i64, ConfigError> {
    pattern
        .parse_millis(param)
        .map_err(|e| ConfigError::DateParseMismatch {
            format: pattern.pattern().to_string(),
            input: param.to_string(),
            reason: e.to_string(),
        })
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

/// Validate a raw configuration into a [`JobSpec`].
///
/// Fails fast on the first bad column, wrapping the cause with the
/// column's position and raw fragment.
pub fn validate(raw: &RawJobConfig) -> Result<JobSpec, ConfigError> {
    let row_count = validate_row_count(raw.slice_record_count.as_ref())?;

    let raw_columns = match &raw.column {
        Some(columns) if !columns.is_empty() => columns,
        _ => return Err(ConfigError::MissingRequiredValue("column".to_string())),
    };

    let columns = raw_columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            parse_column(column).map_err(|e| ConfigError::Column {
                index,
                fragment: column.fragment(),
                source: Box::new(e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let has_any_random_column = columns.iter().any(ColumnDescriptor::is_random);

    Ok(JobSpec {
        columns,
        row_count,
        has_any_random_column,
    })
}

fn validate_row_count(raw: Option<&RawRowCount>) -> Result<u64, ConfigError> {
    let count = match raw {
        None => return Err(ConfigError::MissingRequiredValue("sliceRecordCount".to_string())),
        Some(RawRowCount::Text(text)) if text.trim().is_empty() => {
            return Err(ConfigError::MissingRequiredValue("sliceRecordCount".to_string()))
        }
        Some(RawRowCount::Integer(n)) => *n,
        Some(RawRowCount::Text(text)) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidRowCount(text.clone()))?,
    };

    if count < 1 {
        return Err(ConfigError::InvalidRowCount(count.to_string()));
    }

    Ok(count as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn parse_err(raw: RawColumn) -> ErrorKind {
        parse_column(&raw).unwrap_err().kind()
    }

    #[test]
    fn test_fixed_column() {
        let desc = parse_column(&RawColumn::fixed("long", "42")).unwrap();
        assert_eq!(desc.column_type, ColumnType::Long);
        assert_eq!(desc.mode, ColumnMode::Fixed("42".to_string()));
        assert!(desc.date_format.is_none());
        assert!(!desc.is_random());
    }

    #[test]
    fn test_random_column() {
        let desc = parse_column(&RawColumn::random("LONG", "random 1, 100")).unwrap();
        assert_eq!(desc.range(), Some((1, 100)));
        assert!(desc.is_random());
    }

    #[test]
    fn test_blank_type_defaults_to_string() {
        let raw = RawColumn {
            value: Some("hello".to_string()),
            ..RawColumn::default()
        };
        let desc = parse_column(&raw).unwrap();
        assert_eq!(desc.column_type, ColumnType::String);
    }

    #[test]
    fn test_value_wins_over_random() {
        let raw = RawColumn {
            column_type: Some("long".to_string()),
            value: Some("7".to_string()),
            random: Some("random 1, 2".to_string()),
            date_format: None,
        };
        let desc = parse_column(&raw).unwrap();
        assert_eq!(desc.mode, ColumnMode::Fixed("7".to_string()));
    }

    #[test]
    fn test_value_wins_even_over_malformed_random() {
        let raw = RawColumn {
            column_type: Some("long".to_string()),
            value: Some("7".to_string()),
            random: Some("not a mixup".to_string()),
            date_format: None,
        };
        assert!(parse_column(&raw).is_ok());
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse_err(RawColumn {
                column_type: Some("long".to_string()),
                ..RawColumn::default()
            }),
            ErrorKind::MissingRequiredValue
        );
        assert_eq!(
            parse_err(RawColumn::fixed("string", "   ")),
            ErrorKind::MissingRequiredValue
        );
    }

    #[test]
    fn test_mixup_errors() {
        assert_eq!(
            parse_err(RawColumn::random("long", "random abc, 5")),
            ErrorKind::InvalidMixupSyntax
        );
        assert_eq!(
            parse_err(RawColumn::random("long", "random 1 5")),
            ErrorKind::InvalidMixupSyntax
        );
        assert_eq!(
            parse_err(RawColumn::random("long", "random ,")),
            ErrorKind::EmptyMixupParams
        );
        assert_eq!(
            parse_err(RawColumn::random("long", "random -1, 5")),
            ErrorKind::NegativeMixupParam
        );
        assert_eq!(
            parse_err(RawColumn::random("long", "random 10, 2")),
            ErrorKind::InvertedMixupRange
        );
        assert_eq!(
            parse_err(RawColumn::random("long", "random 10, ")),
            ErrorKind::InvalidMixupSyntax
        );
    }

    #[test]
    fn test_bounds_must_fit_32_bits() {
        for ty in ["string", "bytes", "long", "double", "bool"] {
            assert_eq!(
                parse_err(RawColumn::random(
                    ty,
                    "random 9223372036854775806, 9223372036854775807"
                )),
                ErrorKind::InvalidMixupSyntax,
                "{ty} should reject 64-bit bounds"
            );
            assert_eq!(
                parse_err(RawColumn::random(ty, "random 0, 2147483648")),
                ErrorKind::InvalidMixupSyntax
            );
        }

        let desc = parse_column(&RawColumn::random("long", "random 0, 2147483647")).unwrap();
        assert_eq!(desc.range(), Some((0, i32::MAX as i64)));
    }

    #[test]
    fn test_twelve_hour_date_range_keeps_time_of_day() {
        let desc = parse_column(
            &RawColumn::random("date", "random 2014-07-07 01:00:00, 2014-07-07 11:00:00")
                .with_date_format("yyyy-MM-dd hh:mm:ss"),
        )
        .unwrap();
        let (low, high) = desc.range().unwrap();
        assert_eq!(low, 1_404_691_200_000 + 3_600_000);
        assert_eq!(high - low, 10 * 3_600_000);
    }

    #[test]
    fn test_bool_allows_inverted_range() {
        let desc = parse_column(&RawColumn::random("bool", "random 5, 0")).unwrap();
        assert_eq!(desc.range(), Some((5, 0)));
    }

    #[test]
    fn test_date_column_default_format() {
        let desc = parse_column(&RawColumn::random(
            "date",
            "random 2014-07-07 00:00:00, 2016-07-07 00:00:00",
        ))
        .unwrap();
        assert_eq!(
            desc.date_format.as_ref().map(DatePattern::pattern),
            Some(DEFAULT_DATE_FORMAT)
        );
        assert_eq!(desc.range(), Some((1_404_691_200_000, 1_467_849_600_000)));
    }

    #[test]
    fn test_date_column_custom_format() {
        let desc = parse_column(
            &RawColumn::random("date", "random 2020/01/01, 2020/01/02").with_date_format("yyyy/MM/dd"),
        )
        .unwrap();
        let (low, high) = desc.range().unwrap();
        assert_eq!(high - low, 86_400_000);
    }

    #[test]
    fn test_date_mismatch() {
        assert_eq!(
            parse_err(RawColumn::random("date", "random 2014/07/07, 2016/07/07")),
            ErrorKind::DateParseMismatch
        );
        assert_eq!(
            parse_err(RawColumn::fixed("date", "2014-07-07").with_date_format("yyyy-qq")),
            ErrorKind::DateParseMismatch
        );
    }

    #[test]
    fn test_date_before_epoch_is_negative() {
        assert_eq!(
            parse_err(RawColumn::random(
                "date",
                "random 1969-12-31 00:00:00, 1970-01-02 00:00:00"
            )),
            ErrorKind::NegativeMixupParam
        );
    }

    #[test]
    fn test_validate_sets_random_marker() {
        let raw = RawJobConfig::new(
            vec![
                RawColumn::fixed("long", "42"),
                RawColumn::random("string", "random 3,3"),
            ],
            5,
        );
        let spec = validate(&raw).unwrap();
        assert_eq!(spec.row_count, 5);
        assert_eq!(spec.columns.len(), 2);
        assert!(spec.has_any_random_column);

        let raw = RawJobConfig::new(vec![RawColumn::fixed("bool", "true")], 1000);
        assert!(!validate(&raw).unwrap().has_any_random_column);
    }

    #[test]
    fn test_validate_rejects_bad_jobs() {
        let empty = RawJobConfig::new(vec![], 5);
        assert_eq!(
            validate(&empty).unwrap_err().kind(),
            ErrorKind::MissingRequiredValue
        );

        let no_count = RawJobConfig {
            column: Some(vec![RawColumn::fixed("long", "1")]),
            slice_record_count: None,
        };
        assert_eq!(
            validate(&no_count).unwrap_err().kind(),
            ErrorKind::MissingRequiredValue
        );

        let zero = RawJobConfig::new(vec![RawColumn::fixed("long", "1")], 0);
        assert_eq!(validate(&zero).unwrap_err().kind(), ErrorKind::InvalidRowCount);

        let bad_text = RawJobConfig {
            column: Some(vec![RawColumn::fixed("long", "1")]),
            slice_record_count: Some(RawRowCount::Text("many".to_string())),
        };
        assert_eq!(
            validate(&bad_text).unwrap_err().kind(),
            ErrorKind::InvalidRowCount
        );
    }

    #[test]
    fn test_validate_wraps_column_errors() {
        let raw = RawJobConfig::new(
            vec![RawColumn::fixed("long", "1"), RawColumn::fixed("enum", "x")],
            5,
        );
        let err = validate(&raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMixupSyntax);
        assert_eq!(err.root_cause().kind(), ErrorKind::UnsupportedType);
        assert!(err.to_string().contains(r#""type":"enum""#));
        assert!(matches!(err, ConfigError::Column { index: 1, .. }));
    }

    #[test]
    fn test_split_is_independent() {
        let raw = RawJobConfig::new(vec![RawColumn::random("long", "random 1, 9")], 3);
        let spec = validate(&raw).unwrap();

        let mut clones = spec.split(3);
        assert_eq!(clones.len(), 3);
        assert!(clones.iter().all(|clone| *clone == spec));

        clones[0].columns.clear();
        assert_eq!(clones[1], spec);
        assert_eq!(clones[2].columns.len(), 1);

        assert!(spec.split(0).is_empty());
    }

    #[test]
    fn test_yaml_scalars() {
        let raw = RawJobConfig::from_yaml(
            r#"
column:
  - type: long
    value: 42
  - type: bool
    value: true
  - value: plain
  - value: 1.0
  - value: 2.50
  - value: "2.50"
sliceRecordCount: "10"
"#,
        )
        .unwrap();
        let spec = validate(&raw).unwrap();
        assert_eq!(spec.row_count, 10);
        assert_eq!(spec.columns[0].mode, ColumnMode::Fixed("42".to_string()));
        assert_eq!(spec.columns[1].mode, ColumnMode::Fixed("true".to_string()));
        assert_eq!(spec.columns[2].column_type, ColumnType::String);
        assert_eq!(spec.columns[3].mode, ColumnMode::Fixed("1.0".to_string()));
        assert_eq!(spec.columns[4].mode, ColumnMode::Fixed("2.5".to_string()));
        assert_eq!(spec.columns[5].mode, ColumnMode::Fixed("2.50".to_string()));
    }

    #[test]
    fn test_json_ignores_unknown_keys() {
        let raw = RawJobConfig::from_json(
            r#"{"column":[{"type":"double","random":"random 0, 1"}],"sliceRecordCount":2,"encoding":"utf-8"}"#,
        )
        .unwrap();
        let spec = validate(&raw).unwrap();
        assert_eq!(spec.columns[0].range(), Some((0, 1)));
    }
}
