//! Boolean generator driven by a `false:true` weighting.
//!
//! The mixup bounds of a bool column are not an interval. With `a = low`
//! and `b = high`:
//!
//! - `a == 0`: always `true`
//! - `b == 0`: always `false`
//! - `a == b`: reset to `(0, 1)` and draw, an even split
//! - otherwise draw `r` from `[0, a + b]` and yield `r > a`
//!
//! The last rule gives `true` with probability `b / (a + b + 1)`, not
//! `b / (a + b)`.

use rand::Rng;
use stream_core::ColumnValue;

/// Generate a boolean from a `false:true` weighting.
pub fn generate_ratio_bool<R: Rng>(rng: &mut R, low: i64, high: i64) -> ColumnValue {
    ColumnValue::Bool(ratio_bool(rng, low, high))
}

fn ratio_bool<R: Rng>(rng: &mut R, low: i64, high: i64) -> bool {
    if low == 0 {
        return true;
    }
    if high == 0 {
        return false;
    }

    let (a, b) = if low == high { (0, 1) } else { (low, high) };
    let r = rng.random_range(0..=a.saturating_add(b));
    r > a
}
