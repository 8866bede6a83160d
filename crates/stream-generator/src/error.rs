//! Error types for value synthesis and record emission.

use stream_core::{ColumnType, ConsumerError};
use thiserror::Error;

/// Failure to synthesize a single column value.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// A fixed literal does not parse as its column type
    #[error("cannot parse `{value}` as {column_type}: {reason}")]
    InvalidLiteral {
        column_type: ColumnType,
        value: String,
        reason: String,
    },

    /// A descriptor reached synthesis in a state validation rules out
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

/// Error type for generator operations.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A column failed; no part of the record was sent
    #[error("failed to build record at column #{column}: {source}")]
    RecordBuildFailure {
        column: usize,
        #[source]
        source: SynthesisError,
    },

    /// The consumer rejected a record
    #[error("failed to send record: {0}")]
    Send(#[from] ConsumerError),
}
