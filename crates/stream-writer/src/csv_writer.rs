//! CSV record writer.

use crate::convert::to_csv_field;
use csv::Writer;
use std::io::Write;
use stream_core::{ConsumerError, Record, RecordConsumer};

/// Writes each record as one CSV row.
///
/// Records carry no column names, so an optional header must be supplied
/// by the caller.
pub struct CsvRecordWriter<W: Write> {
    writer: Writer<W>,
    header: Option<Vec<String>>,
    rows_written: u64,
}

impl<W: Write> CsvRecordWriter<W> {
    /// Create a writer over any byte sink.
    pub fn new(inner: W) -> Self {
        Self {
            writer: Writer::from_writer(inner),
            header: None,
            rows_written: 0,
        }
    }

    /// Write this header row before the first record.
    pub fn with_header(mut self, header: Vec<String>) -> Self {
        self.header = Some(header);
        self
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

impl<W: Write> RecordConsumer for CsvRecordWriter<W> {
    fn send(&mut self, record: &Record) -> Result<(), ConsumerError> {
        if let Some(header) = self.header.take() {
            self.writer.write_record(&header).map_err(encode_error)?;
        }

        self.writer
            .write_record(record.columns().iter().map(to_csv_field))
            .map_err(encode_error)?;
        self.rows_written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ConsumerError> {
        self.writer.flush()?;
        Ok(())
    }
}

fn encode_error(err: csv::Error) -> ConsumerError {
    ConsumerError::Encode(err.to_string())
}
