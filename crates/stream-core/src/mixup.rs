//! Grammar for the `random <p1>, <p2>` mixup expression.
//!
//! The parser only splits the expression into its two raw parameters.
//! Interpreting them (integers, or dates through the column's pattern) is
//! up to the column parser, because the meaning depends on the column type.

use crate::error::ConfigError;
use once_cell::sync::Lazy;
use regex::Regex;

/// `random` keyword (any case), whitespace, then two comma-separated
/// parameters. Parameters may contain inner spaces (dates do) but no commas.
static MIXUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*random\s+([^,]*?)\s*,\s*([^,]*?)\s*$").unwrap());

/// Raw parameters of a mixup expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixupParams {
    pub param1: String,
    pub param2: String,
}

impl MixupParams {
    /// True when both parameters are blank.
    pub fn is_empty(&self) -> bool {
        self.param1.trim().is_empty() && self.param2.trim().is_empty()
    }
}

/// Split a mixup expression into its two raw parameters.
pub fn parse_mixup(expr: &str) -> Result<MixupParams, ConfigError> {
    let captures = MIXUP_RE
        .captures(expr)
        .ok_or_else(|| ConfigError::InvalidMixupSyntax {
            expr: expr.to_string(),
            reason: "expected the form `random <param1>, <param2>`".to_string(),
        })?;

    Ok(MixupParams {
        param1: captures[1].to_string(),
        param2: captures[2].to_string(),
    })
}
