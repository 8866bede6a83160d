//! The downstream hand-off for built records.

use crate::values::Record;
use thiserror::Error;

/// Errors raised by a [`RecordConsumer`].
#[derive(Debug, Error)]
pub enum ConsumerError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding error (CSV, JSON).
    #[error("Encoding error: {0}")]
    Encode(String),

    /// The receiving side has gone away.
    #[error("Record channel closed")]
    Closed,
}

/// Accepts fully built records, one at a time.
///
/// `send` is synchronous: it may block for backpressure, and the caller
/// does not count the row as emitted until it returns `Ok`.
pub trait RecordConsumer {
    /// Hand one record downstream.
    fn send(&mut self, record: &Record) -> Result<(), ConsumerError>;

    /// Flush anything buffered. Called once after the last record.
    fn flush(&mut self) -> Result<(), ConsumerError> {
        Ok(())
    }
}

impl RecordConsumer for Vec<Record> {
    fn send(&mut self, record: &Record) -> Result<(), ConsumerError> {
        self.push(record.clone());
        Ok(())
    }
}

impl<C: RecordConsumer + ?Sized> RecordConsumer for &mut C {
    fn send(&mut self, record: &Record) -> Result<(), ConsumerError> {
        (**self).send(record)
    }

    fn flush(&mut self) -> Result<(), ConsumerError> {
        (**self).flush()
    }
}

impl<C: RecordConsumer + ?Sized> RecordConsumer for Box<C> {
    fn send(&mut self, record: &Record) -> Result<(), ConsumerError> {
        (**self).send(record)
    }

    fn flush(&mut self) -> Result<(), ConsumerError> {
        (**self).flush()
    }
}
