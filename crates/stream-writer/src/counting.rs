//! Consumer that counts and discards records.

use stream_core::{ConsumerError, Record, RecordConsumer};

/// Counts records and their column values without keeping them.
#[derive(Debug, Default)]
pub struct CountingConsumer {
    pub records: u64,
    pub values: u64,
}

impl CountingConsumer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordConsumer for CountingConsumer {
    fn send(&mut self, record: &Record) -> Result<(), ConsumerError> {
        self.records += 1;
        self.values += record.len() as u64;
        Ok(())
    }
}
