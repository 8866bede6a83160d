//! JSON Lines record writer.

use crate::convert::to_json_value;
use std::io::{BufWriter, Write};
use stream_core::{ConsumerError, Record, RecordConsumer};

/// Default buffer size for record output.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Writes each record as a JSON array on its own line.
pub struct JsonlWriter<W: Write> {
    writer: BufWriter<W>,
    rows_written: u64,
}

impl<W: Write> JsonlWriter<W> {
    /// Create a writer over any byte sink.
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, inner),
            rows_written: 0,
        }
    }

    /// Number of records written.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> Result<W, ConsumerError> {
        self.writer
            .into_inner()
            .map_err(|e| ConsumerError::Io(e.into_error()))
    }
}

impl<W: Write> RecordConsumer for JsonlWriter<W> {
    fn send(&mut self, record: &Record) -> Result<(), ConsumerError> {
        let line: Vec<serde_json::Value> = record.columns().iter().map(to_json_value).collect();
        serde_json::to_writer(&mut self.writer, &line)
            .map_err(|e| ConsumerError::Encode(e.to_string()))?;
        self.writer.write_all(b"\n")?;
        self.rows_written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ConsumerError> {
        self.writer.flush()?;
        Ok(())
    }
}
