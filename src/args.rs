//! CLI argument definitions.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Output encoding for emitted records.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON array per record
    Jsonl,
    /// One CSV row per record
    Csv,
    /// Count records and discard them
    None,
}

impl OutputFormat {
    /// File extension for per-task output files.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
            OutputFormat::None => "",
        }
    }
}

/// Arguments for `validate`.
#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    /// Path to the job configuration (YAML or JSON)
    #[arg(long, short = 'c')]
    pub config: PathBuf,
}

/// Arguments for `run`.
#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    /// Path to the job configuration (YAML or JSON)
    #[arg(long, short = 'c')]
    pub config: PathBuf,

    /// Number of parallel tasks; each emits sliceRecordCount records
    #[arg(long, short = 't', default_value = "1", env = "STREAM_READER_TASKS")]
    pub tasks: usize,

    /// Record output format
    #[arg(long, short = 'f', value_enum, default_value = "jsonl")]
    pub format: OutputFormat,

    /// Write one file per task into this directory instead of stdout
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Write a c0..cN header row before CSV output
    #[arg(long)]
    pub header: bool,

    /// Also write the run report as JSON to this file
    #[arg(long)]
    pub report_json: Option<PathBuf>,

    /// Records buffered between the tasks and the stdout writer
    #[arg(long, default_value = "1024")]
    pub channel_capacity: usize,
}
