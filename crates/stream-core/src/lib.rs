//! Core types for the stream-reader record generator.
//!
//! This crate turns a declarative column list into validated, immutable
//! descriptors and defines the values and records that flow out of the
//! generator:
//!
//! - [`RawJobConfig`] / [`RawColumn`] - configuration as written by the operator
//! - [`ColumnDescriptor`] - one validated column (fixed literal or random range)
//! - [`JobSpec`] - the validated job, cloned once per parallel task
//! - [`ColumnValue`] / [`Record`] - typed values handed to a [`RecordConsumer`]
//!
//! # Architecture
//!
//! ```text
//! RawJobConfig (YAML / JSON)
//!        │  validate()
//!        ▼
//!     JobSpec ──split(n)──► [JobSpec; n]
//!        │
//!        ├─── stream-generator  (synthesizes Records from descriptors)
//!        └─── stream-writer     (RecordConsumer implementations)
//! ```
//!
//! # Example
//!
//! ```rust
//! use stream_core::{validate, RawJobConfig};
//!
//! let raw = RawJobConfig::from_yaml(r#"
//! column:
//!   - type: long
//!     value: "42"
//!   - type: string
//!     random: "random 3, 8"
//! sliceRecordCount: 10
//! "#).unwrap();
//!
//! let spec = validate(&raw).unwrap();
//! assert!(spec.has_any_random_column);
//! assert_eq!(spec.split(4).len(), 4);
//! ```

pub mod consumer;
pub mod date_format;
pub mod error;
pub mod mixup;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use consumer::{ConsumerError, RecordConsumer};
pub use date_format::{DatePattern, DEFAULT_DATE_FORMAT};
pub use error::{ConfigError, ErrorKind, LoadError};
pub use mixup::{parse_mixup, MixupParams};
pub use schema::{
    parse_column, validate, ColumnDescriptor, ColumnMode, JobSpec, RawColumn, RawJobConfig,
    RawRowCount,
};
pub use types::ColumnType;
pub use values::{ColumnValue, Record};
