//! Date value generators.

use rand::Rng;
use stream_core::{ColumnValue, DatePattern};

/// Generate a random instant in the given epoch-millisecond range (inclusive).
pub fn generate_date_range<R: Rng>(
    rng: &mut R,
    start_millis: i64,
    end_millis: i64,
    pattern: &DatePattern,
) -> ColumnValue {
    ColumnValue::Date {
        millis: rng.random_range(start_millis..=end_millis),
        pattern: pattern.clone(),
    }
}
