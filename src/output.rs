//! Record consumers for the CLI output modes.

use crate::args::OutputFormat;
use anyhow::Context;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use stream_core::{ConsumerError, Record, RecordConsumer};
use stream_writer::{CountingConsumer, CsvRecordWriter, JsonlWriter};
use tokio::sync::mpsc;
use tracing::debug;

/// A consumer that can move onto a blocking worker thread.
pub type BoxedConsumer = Box<dyn RecordConsumer + Send>;

/// How records leave a task.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// One file per task in this directory; stdout otherwise
    pub output_dir: Option<PathBuf>,
    /// CSV header row, one name per column
    pub header: Option<Vec<String>>,
}

impl OutputConfig {
    /// Whether tasks feed a shared stdout writer through a channel.
    pub fn uses_stdout(&self) -> bool {
        self.output_dir.is_none() && self.format != OutputFormat::None
    }
}

/// Synthetic column names for a CSV header.
pub fn column_header(column_count: usize) -> Vec<String> {
    (0..column_count).map(|i| format!("c{i}")).collect()
}

/// Output file for one task.
pub fn task_file_path(dir: &Path, task_id: usize, format: OutputFormat) -> PathBuf {
    dir.join(format!("task-{task_id}.{}", format.extension()))
}

/// Build a writer of the given format over any byte sink.
pub fn writer_for<W: Write + Send + 'static>(
    format: OutputFormat,
    sink: W,
    header: Option<&[String]>,
) -> BoxedConsumer {
    match format {
        OutputFormat::Jsonl => Box::new(JsonlWriter::new(sink)),
        OutputFormat::Csv => {
            let writer = CsvRecordWriter::new(sink);
            match header {
                Some(header) => Box::new(writer.with_header(header.to_vec())),
                None => Box::new(writer),
            }
        }
        OutputFormat::None => Box::new(CountingConsumer::new()),
    }
}

/// Open the per-task file consumer, or a counting consumer for `none`.
pub fn open_task_consumer(config: &OutputConfig, task_id: usize) -> anyhow::Result<BoxedConsumer> {
    let dir = match (&config.output_dir, config.format) {
        (Some(dir), format) if format != OutputFormat::None => dir,
        _ => return Ok(Box::new(CountingConsumer::new())),
    };

    let path = task_file_path(dir, task_id, config.format);
    let file = File::create(&path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    debug!("Task {} writing to {}", task_id, path.display());

    Ok(writer_for(config.format, file, config.header.as_deref()))
}

/// Drain the shared record channel into one writer until every sender is dropped.
///
/// Blocks the calling thread; run it on a blocking worker.
pub fn drain_channel(
    mut rx: mpsc::Receiver<Record>,
    consumer: &mut dyn RecordConsumer,
) -> Result<u64, ConsumerError> {
    let mut written = 0u64;
    while let Some(record) = rx.blocking_recv() {
        consumer.send(&record)?;
        written += 1;
    }
    consumer.flush()?;
    Ok(written)
}
