//! Record synthesis for the stream-reader framework.
//!
//! This crate provides the [`DataGenerator`], which turns validated column
//! descriptors into typed values, and the [`RecordEmitter`], which drives a
//! single task's row loop against a [`RecordConsumer`].
//!
//! # Architecture
//!
//! ```text
//! JobSpec (one per task)
//!        │
//!        ▼
//! ┌──────────────────┐      ┌─────────────────┐
//! │  RecordEmitter   │─────►│  DataGenerator  │  synthesize() per column
//! │                  │      │  - rng          │
//! │  - remaining     │      └─────────────────┘
//! │  - last_record   │
//! └────────┬─────────┘
//!          │ send(&Record)
//!          ▼
//!    RecordConsumer
//! ```
//!
//! When no column is random the emitter builds one record and re-sends it
//! for every row; otherwise it rebuilds every column before each send.
//!
//! # Example
//!
//! ```rust
//! use stream_core::{validate, RawColumn, RawJobConfig, Record};
//! use stream_generator::{DataGenerator, RecordEmitter};
//!
//! let raw = RawJobConfig::new(
//!     vec![
//!         RawColumn::fixed("long", "42"),
//!         RawColumn::random("string", "random 3, 3"),
//!     ],
//!     5,
//! );
//! let spec = validate(&raw).unwrap();
//!
//! let mut sink: Vec<Record> = Vec::new();
//! let mut emitter = RecordEmitter::new(spec, DataGenerator::from_os_rng());
//! let summary = emitter.run(&mut sink).unwrap();
//! assert_eq!(summary.rows_sent, 5);
//! ```
//!
//! # Generators
//!
//! Per column type, random mode draws from the inclusive range `[low, high]`:
//!
//! - `string` - alphanumeric text whose length is drawn from the range
//! - `long` - integer
//! - `double` - float
//! - `date` - epoch-millisecond instant
//! - `bytes` - alphanumeric bytes whose length is drawn from the range
//! - `bool` - `low:high` read as a false:true weighting

pub mod emitter;
pub mod error;
pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use emitter::{EmitSummary, RecordEmitter};
pub use error::{GeneratorError, SynthesisError};
pub use generator::DataGenerator;
pub use generators::synthesize;
