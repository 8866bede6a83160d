//! Individual value generators for the column types.
//!
//! This module dispatches a validated descriptor to the generation logic
//! for its mode and type.

pub mod boolean;
pub mod numeric;
pub mod static_value;
pub mod text;
pub mod timestamp;

use crate::error::SynthesisError;
use rand::Rng;
use stream_core::{ColumnDescriptor, ColumnMode, ColumnType, ColumnValue, DatePattern};

/// Produce one value for a column.
///
/// Fixed columns yield the same value on every call.
pub fn synthesize<R: Rng>(
    descriptor: &ColumnDescriptor,
    rng: &mut R,
) -> Result<ColumnValue, SynthesisError> {
    match &descriptor.mode {
        ColumnMode::Fixed(value) => static_value::parse_fixed(
            descriptor.column_type,
            value,
            descriptor.date_format.as_ref(),
        ),

        ColumnMode::Random { low, high } => {
            let (low, high) = (*low, *high);
            match descriptor.column_type {
                ColumnType::String => Ok(text::generate_string(rng, low, high)),

                ColumnType::Long => Ok(numeric::generate_long_range(rng, low, high)),

                ColumnType::Double => Ok(numeric::generate_double_range(rng, low, high)),

                ColumnType::Date => {
                    let pattern = date_pattern(descriptor)?;
                    Ok(timestamp::generate_date_range(rng, low, high, pattern))
                }

                ColumnType::Bool => Ok(boolean::generate_ratio_bool(rng, low, high)),

                ColumnType::Bytes => Ok(text::generate_bytes(rng, low, high)),
            }
        }
    }
}

fn date_pattern(descriptor: &ColumnDescriptor) -> Result<&DatePattern, SynthesisError> {
    descriptor
        .date_format
        .as_ref()
        .ok_or_else(|| SynthesisError::Invariant("date column without a date pattern".to_string()))
}
