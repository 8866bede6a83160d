//! Task-level lifecycle: emit one copy of the job into a consumer.

use crate::lifecycle::Lifecycle;
use crate::metrics::TaskMetrics;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use stream_core::{JobSpec, RecordConsumer};
use stream_generator::{DataGenerator, GeneratorError, RecordEmitter};
use tracing::{info, warn};

/// One parallel reader task.
pub struct ReaderTask<R = StdRng> {
    task_id: usize,
    emitter: RecordEmitter<R>,
    cancel: Option<Arc<AtomicBool>>,
}

impl ReaderTask<StdRng> {
    /// Take ownership of one split copy, with a fresh OS-seeded generator.
    pub fn init(task_id: usize, spec: JobSpec) -> Self {
        Self::with_generator(task_id, spec, DataGenerator::from_os_rng())
    }
}

impl<R: Rng> ReaderTask<R> {
    pub fn with_generator(task_id: usize, spec: JobSpec, generator: DataGenerator<R>) -> Self {
        Self {
            task_id,
            emitter: RecordEmitter::new(spec, generator),
            cancel: None,
        }
    }

    /// Stop between rows once this flag is set.
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn task_id(&self) -> usize {
        self.task_id
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Emit every row of this task's copy, then flush the consumer.
    ///
    /// A failure stops the task at once; rows already accepted stay sent.
    pub fn start_read<C: RecordConsumer + ?Sized>(
        &mut self,
        consumer: &mut C,
    ) -> Result<TaskMetrics, GeneratorError> {
        info!(
            "Task {} starting: {} rows",
            self.task_id,
            self.emitter.remaining()
        );
        let started_at = Utc::now();
        let start = Instant::now();

        let mut cancelled = false;
        loop {
            if self.is_cancelled() {
                warn!(
                    "Task {} cancelled with {} rows remaining",
                    self.task_id,
                    self.emitter.remaining()
                );
                cancelled = true;
                break;
            }
            if !self.emitter.emit_next(consumer)? {
                break;
            }
        }
        consumer.flush()?;

        let summary = self.emitter.summary();
        let metrics = TaskMetrics {
            task_id: self.task_id,
            rows_sent: summary.rows_sent,
            records_built: summary.records_built,
            started_at,
            duration: start.elapsed(),
            cancelled,
        };
        info!(
            "Task {} finished: {} rows sent, {} records built in {:.2}s",
            self.task_id,
            metrics.rows_sent,
            metrics.records_built,
            metrics.duration.as_secs_f64()
        );
        Ok(metrics)
    }
}

impl<R> Lifecycle for ReaderTask<R> {}
