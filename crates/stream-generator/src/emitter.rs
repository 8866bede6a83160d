//! Per-task record emission loop.

use crate::error::GeneratorError;
use crate::generator::DataGenerator;
use rand::rngs::StdRng;
use rand::Rng;
use stream_core::{JobSpec, Record, RecordConsumer};
use tracing::debug;

/// Outcome of a completed emission run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    /// Records accepted by the consumer
    pub rows_sent: u64,
    /// Records synthesized; 1 when no column is random
    pub records_built: u64,
}

/// Drives one task's rows into a consumer.
///
/// Holds the task's remaining row count and a single cached record. When
/// the job has no random column the cached record is built once and sent
/// for every row; otherwise every column is rebuilt before each send.
pub struct RecordEmitter<R = StdRng> {
    spec: JobSpec,
    generator: DataGenerator<R>,
    remaining: u64,
    rows_sent: u64,
    last_record: Option<Record>,
}

impl<R: Rng> RecordEmitter<R> {
    /// Create an emitter for one task's copy of the job.
    pub fn new(spec: JobSpec, generator: DataGenerator<R>) -> Self {
        let remaining = spec.row_count;
        Self {
            spec,
            generator,
            remaining,
            rows_sent: 0,
            last_record: None,
        }
    }

    /// Rows still to be sent.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// The most recently sent record.
    pub fn last_record(&self) -> Option<&Record> {
        self.last_record.as_ref()
    }

    /// Snapshot of the progress so far.
    pub fn summary(&self) -> EmitSummary {
        EmitSummary {
            rows_sent: self.rows_sent,
            records_built: self.generator.records_built(),
        }
    }

    /// Emit a single row.
    ///
    /// Returns `Ok(false)` once every row has been sent. The counter only
    /// moves after the consumer accepts the record.
    pub fn emit_next<C: RecordConsumer + ?Sized>(
        &mut self,
        consumer: &mut C,
    ) -> Result<bool, GeneratorError> {
        if self.remaining == 0 {
            return Ok(false);
        }

        let record = match self.last_record.take() {
            Some(record) if !self.spec.has_any_random_column => record,
            _ => self.generator.build_record(&self.spec.columns)?,
        };
        let record = self.last_record.insert(record);

        consumer.send(record)?;
        self.remaining -= 1;
        self.rows_sent += 1;

        if self.rows_sent % 100_000 == 0 {
            debug!("Sent {} rows, {} remaining", self.rows_sent, self.remaining);
        }

        Ok(true)
    }

    /// Emit every remaining row, then flush the consumer.
    pub fn run<C: RecordConsumer + ?Sized>(
        &mut self,
        consumer: &mut C,
    ) -> Result<EmitSummary, GeneratorError> {
        while self.emit_next(consumer)? {}
        consumer.flush()?;
        Ok(self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stream_core::{validate, ConsumerError, RawColumn, RawJobConfig};

    fn spec(columns: Vec<RawColumn>, rows: i64) -> JobSpec {
        validate(&RawJobConfig::new(columns, rows)).unwrap()
    }

    /// Fails after accepting `accept` records.
    struct FailingConsumer {
        accept: usize,
        received: Vec<Record>,
    }

    impl RecordConsumer for FailingConsumer {
        fn send(&mut self, record: &Record) -> Result<(), ConsumerError> {
            if self.received.len() == self.accept {
                return Err(ConsumerError::Closed);
            }
            self.received.push(record.clone());
            Ok(())
        }
    }

    #[test]
    fn test_reuses_record_without_random_columns() {
        let spec = spec(vec![RawColumn::fixed("bool", "true")], 1000);
        let mut emitter = RecordEmitter::new(spec, DataGenerator::seeded(42));
        let mut sink: Vec<Record> = Vec::new();

        let summary = emitter.run(&mut sink).unwrap();

        assert_eq!(summary.rows_sent, 1000);
        assert_eq!(summary.records_built, 1);
        assert_eq!(sink.len(), 1000);
        assert!(sink.iter().all(|r| r == &sink[0]));
        assert_eq!(emitter.remaining(), 0);
    }

    #[test]
    fn test_rebuilds_every_row_with_random_column() {
        let spec = spec(
            vec![
                RawColumn::fixed("long", "42"),
                RawColumn::random("long", "random 0, 1000000000"),
            ],
            50,
        );
        let mut emitter = RecordEmitter::new(spec, DataGenerator::seeded(42));
        let mut sink: Vec<Record> = Vec::new();

        let summary = emitter.run(&mut sink).unwrap();

        assert_eq!(summary.records_built, 50);
        assert_eq!(sink.len(), 50);
        assert!(sink.iter().any(|r| r != &sink[0]));
    }

    #[test]
    fn test_emit_next_steps_one_row() {
        let spec = spec(vec![RawColumn::fixed("string", "x")], 2);
        let mut emitter = RecordEmitter::new(spec, DataGenerator::seeded(1));
        let mut sink: Vec<Record> = Vec::new();

        assert!(emitter.last_record().is_none());
        assert!(emitter.emit_next(&mut sink).unwrap());
        assert_eq!(emitter.remaining(), 1);
        assert_eq!(emitter.last_record(), sink.last());
        assert!(emitter.emit_next(&mut sink).unwrap());
        assert!(!emitter.emit_next(&mut sink).unwrap());
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_send_failure_stops_without_decrement() {
        let spec = spec(vec![RawColumn::random("long", "random 1, 5")], 10);
        let mut emitter = RecordEmitter::new(spec, DataGenerator::seeded(3));
        let mut consumer = FailingConsumer {
            accept: 4,
            received: Vec::new(),
        };

        let err = emitter.run(&mut consumer).unwrap_err();

        assert!(matches!(err, GeneratorError::Send(ConsumerError::Closed)));
        assert_eq!(consumer.received.len(), 4);
        assert_eq!(emitter.remaining(), 6);
        assert_eq!(emitter.summary().rows_sent, 4);
    }

    #[test]
    fn test_build_failure_sends_nothing() {
        let spec = spec(
            vec![
                RawColumn::fixed("long", "1"),
                RawColumn::fixed("double", "one point five"),
            ],
            3,
        );
        let mut emitter = RecordEmitter::new(spec, DataGenerator::seeded(3));
        let mut sink: Vec<Record> = Vec::new();

        let err = emitter.run(&mut sink).unwrap_err();

        assert!(matches!(
            err,
            GeneratorError::RecordBuildFailure { column: 1, .. }
        ));
        assert!(sink.is_empty());
        assert_eq!(emitter.remaining(), 3);
    }
}
