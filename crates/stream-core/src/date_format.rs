//! Java-style date patterns (`yyyy-MM-dd HH:mm:ss`) backed by chrono.
//!
//! Job files written for the host use `SimpleDateFormat` pattern letters.
//! A [`DatePattern`] translates such a pattern once into a chrono format
//! string and then parses and formats epoch-millisecond instants with it.
//! All instants are interpreted in UTC unless the pattern carries a zone.
//!
//! Fields the pattern leaves out default to zero, so a date-only pattern
//! parses to midnight. A 12-hour `h` without an `a` marker reads as a
//! morning hour.

use chrono::format::{parse, Item, Parsed, StrftimeItems};
use chrono::DateTime;

/// Pattern used when a date column does not set `dateFormat`.
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd HH:mm:ss";

/// A validated date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pattern: String,
    format: String,
    has_offset: bool,
}

impl Default for DatePattern {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
            format: "%Y-%m-%d %H:%M:%S".to_string(),
            has_offset: false,
        }
    }
}

impl DatePattern {
    /// Translate a Java-style pattern.
    ///
    /// Fails on pattern letters with no chrono equivalent and on unterminated
    /// quoted literals.
    pub fn new(pattern: &str) -> Result<Self, String> {
        let mut format = String::with_capacity(pattern.len() * 2);
        let mut has_offset = false;
        let chars: Vec<char> = pattern.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c == '\'' {
                // '' is an escaped quote, otherwise read up to the closing quote
                if chars.get(i + 1) == Some(&'\'') {
                    format.push('\'');
                    i += 2;
                    continue;
                }
                let mut j = i + 1;
                loop {
                    match chars.get(j) {
                        None => return Err(format!("unterminated quote in pattern `{pattern}`")),
                        Some('\'') if chars.get(j + 1) == Some(&'\'') => {
                            format.push('\'');
                            j += 2;
                        }
                        Some('\'') => break,
                        Some(&lit) => {
                            push_literal(&mut format, lit);
                            j += 1;
                        }
                    }
                }
                i = j + 1;
                continue;
            }

            if !c.is_ascii_alphabetic() {
                push_literal(&mut format, c);
                i += 1;
                continue;
            }

            let run = chars[i..].iter().take_while(|&&n| n == c).count();
            let spec = match (c, run) {
                ('y', 2) => "%y",
                ('y', _) => "%Y",
                ('M', 1..=2) => "%m",
                ('M', 3) => "%b",
                ('M', _) => "%B",
                ('d', _) => "%d",
                ('D', _) => "%j",
                ('H', _) => "%H",
                ('h', _) => "%I",
                ('m', _) => "%M",
                ('s', _) => "%S",
                ('S', _) => "%3f",
                ('a', _) => "%p",
                ('E', 1..=3) => "%a",
                ('E', _) => "%A",
                ('Z', _) => {
                    has_offset = true;
                    "%z"
                }
                ('X', _) | ('x', _) => {
                    has_offset = true;
                    "%:z"
                }
                _ => return Err(format!("unsupported pattern letter `{c}` in `{pattern}`")),
            };
            format.push_str(spec);
            i += run;
        }

        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(format!("pattern `{pattern}` has no chrono equivalent"));
        }

        Ok(Self {
            pattern: pattern.to_string(),
            format,
            has_offset,
        })
    }

    /// The pattern as configured.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The translated chrono format string.
    pub fn chrono_format(&self) -> &str {
        &self.format
    }

    /// Parse a date string into epoch milliseconds.
    ///
    /// Missing time fields are zero and a bare 12-hour clock is AM. Fields
    /// the input did supply are never overridden.
    pub fn parse_millis(&self, input: &str) -> Result<i64, chrono::ParseError> {
        let mut parsed = Parsed::new();
        parse(&mut parsed, input.trim(), StrftimeItems::new(&self.format))?;

        // Each setter fails without effect when the field is already set.
        let _ = parsed.set_ampm(false);
        let _ = parsed.set_hour(0);
        let _ = parsed.set_minute(0);
        let _ = parsed.set_second(0);
        let _ = parsed.set_nanosecond(0);

        if self.has_offset {
            return parsed.to_datetime().map(|dt| dt.timestamp_millis());
        }
        parsed
            .to_naive_datetime_with_offset(0)
            .map(|dt| dt.and_utc().timestamp_millis())
    }

    /// Render epoch milliseconds with this pattern.
    ///
    /// Returns `None` when the instant is outside chrono's range.
    pub fn format_millis(&self, millis: i64) -> Option<String> {
        DateTime::from_timestamp_millis(millis).map(|dt| dt.format(&self.format).to_string())
    }
}

fn push_literal(format: &mut String, c: char) {
    if c == '%' {
        format.push_str("%%");
    } else {
        format.push(c);
    }
}
