//! Random alphanumeric strings and byte strings.

use rand::distr::Alphanumeric;
use rand::Rng;
use stream_core::ColumnValue;

/// Generate an alphanumeric string with a length drawn from `[min_len, max_len]`.
pub fn generate_string<R: Rng>(rng: &mut R, min_len: i64, max_len: i64) -> ColumnValue {
    let bytes = random_alphanumeric(rng, min_len, max_len);
    // Alphanumeric only yields ASCII
    ColumnValue::String(bytes.into_iter().map(char::from).collect())
}

/// Generate the bytes of an alphanumeric string with a length drawn from `[min_len, max_len]`.
pub fn generate_bytes<R: Rng>(rng: &mut R, min_len: i64, max_len: i64) -> ColumnValue {
    ColumnValue::Bytes(random_alphanumeric(rng, min_len, max_len))
}

/// Validated bounds are non-negative; a negative length yields an empty value.
fn random_alphanumeric<R: Rng>(rng: &mut R, min_len: i64, max_len: i64) -> Vec<u8> {
    let len = usize::try_from(rng.random_range(min_len..=max_len)).unwrap_or(0);
    (0..len).map(|_| rng.sample(Alphanumeric)).collect()
}
