//! stream-reader library
//!
//! Generates synthetic record streams from a declarative column schema.
//! Each column is either a fixed literal or a `random <low>, <high>` mixup;
//! the job is validated once, split into independent task copies, and every
//! task emits `sliceRecordCount` records to its own consumer.
//!
//! # Crates
//!
//! - `stream_core` - column parsing, validation, splitting, record types
//! - `stream_generator` - value synthesis and the per-task emission loop
//! - `stream_writer` - JSON Lines, CSV, counting and channel consumers
//!
//! # CLI Usage
//!
//! ```bash
//! # Check a job file and print the resolved columns
//! stream-reader validate --config job.yaml
//!
//! # Four parallel tasks, one JSON Lines file per task
//! stream-reader run --config job.yaml --tasks 4 --format jsonl --output-dir out/
//!
//! # All tasks through one bounded channel to stdout
//! stream-reader run --config job.json --tasks 2 --format csv
//! ```

pub mod args;
pub mod job;
pub mod lifecycle;
pub mod metrics;
pub mod output;
pub mod runner;
pub mod task;

pub use args::{OutputFormat, RunArgs, ValidateArgs};
pub use job::ReaderJob;
pub use lifecycle::Lifecycle;
pub use metrics::{JobReport, TaskMetrics};
pub use runner::{run_job, RunOptions};
pub use task::ReaderTask;
