//! Numeric value generators.

use rand::Rng;
use stream_core::ColumnValue;

/// Generate a random integer in the given range (inclusive).
pub fn generate_long_range<R: Rng>(rng: &mut R, low: i64, high: i64) -> ColumnValue {
    ColumnValue::Long(rng.random_range(low..=high))
}

/// Generate a random float in the given range (inclusive).
pub fn generate_double_range<R: Rng>(rng: &mut R, low: i64, high: i64) -> ColumnValue {
    ColumnValue::Double(rng.random_range(low as f64..=high as f64))
}
