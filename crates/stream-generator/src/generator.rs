//! Record builder that synthesizes every column of a row.

use crate::error::GeneratorError;
use crate::generators::synthesize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stream_core::{ColumnDescriptor, Record};

/// Builds records from column descriptors.
///
/// Each task owns its own generator, so the random source is never shared
/// between tasks.
pub struct DataGenerator<R = StdRng> {
    rng: R,
    /// Records built so far
    records_built: u64,
}

impl DataGenerator<StdRng> {
    /// Create a generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Create a generator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DataGenerator<R> {
    /// Create a generator over the given random source.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            records_built: 0,
        }
    }

    /// Number of records built by this generator.
    pub fn records_built(&self) -> u64 {
        self.records_built
    }

    /// Build one record, synthesizing every column in declared order.
    ///
    /// The first failing column aborts the build; nothing partial is returned.
    pub fn build_record(&mut self, columns: &[ColumnDescriptor]) -> Result<Record, GeneratorError> {
        let mut record = Record::with_capacity(columns.len());

        for (column, descriptor) in columns.iter().enumerate() {
            let value = synthesize(descriptor, &mut self.rng)
                .map_err(|source| GeneratorError::RecordBuildFailure { column, source })?;
            record.add_column(value);
        }

        self.records_built += 1;
        Ok(record)
    }
}
