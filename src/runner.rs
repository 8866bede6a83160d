//! Parallel job runner.
//!
//! Each split copy of the job runs on its own blocking worker. Per-task
//! output files need no coordination; stdout output goes through one
//! bounded channel to a single writer, so a slow stdout pushes back on
//! every task.

use crate::job::ReaderJob;
use crate::lifecycle::Lifecycle;
use crate::metrics::{JobReport, TaskMetrics};
use crate::output::{drain_channel, open_task_consumer, writer_for, BoxedConsumer, OutputConfig};
use crate::task::ReaderTask;
use anyhow::{anyhow, Context};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;
use stream_core::JobSpec;
use stream_writer::record_channel;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Number of parallel tasks
    pub tasks: usize,
    pub output: OutputConfig,
    /// Records buffered between the tasks and the stdout writer
    pub channel_capacity: usize,
    /// Shared flag that stops every task between rows
    pub cancel: Arc<AtomicBool>,
}

impl RunOptions {
    pub fn new(tasks: usize, output: OutputConfig) -> Self {
        Self {
            tasks,
            output,
            channel_capacity: 1024,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }
}

/// Run every task of the job in parallel and collect their metrics.
///
/// A failing task does not stop the others; the first failure is returned
/// once all tasks have finished.
pub async fn run_job(mut job: ReaderJob, options: RunOptions) -> anyhow::Result<JobReport> {
    let start = Instant::now();
    job.prepare()?;

    if let Some(dir) = &options.output.output_dir {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    let specs = job.split(options.tasks);

    // Every consumer is opened before anything is spawned, so a failure
    // here leaves no task running.
    let (shared, rx) = if options.output.uses_stdout() {
        let (consumer, rx) = record_channel(options.channel_capacity);
        (Some(consumer), Some(rx))
    } else {
        (None, None)
    };
    let consumers = (0..specs.len())
        .map(|task_id| -> anyhow::Result<BoxedConsumer> {
            match &shared {
                Some(channel) => Ok(Box::new(channel.clone())),
                None => open_task_consumer(&options.output, task_id),
            }
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let writer = rx.map(|rx| {
        let format = options.output.format;
        let header = options.output.header.clone();
        tokio::task::spawn_blocking(move || {
            let mut stdout = writer_for(format, std::io::stdout(), header.as_deref());
            drain_channel(rx, &mut *stdout)
        })
    });

    let handles: Vec<_> = specs
        .into_iter()
        .zip(consumers)
        .enumerate()
        .map(|(task_id, (spec, consumer))| {
            (
                task_id,
                spawn_task(task_id, spec, consumer, options.cancel.clone()),
            )
        })
        .collect();
    // Only the tasks hold senders now; the writer ends when they are done.
    drop(shared);

    let mut metrics = Vec::with_capacity(handles.len());
    let mut first_error: Option<anyhow::Error> = None;
    for (task_id, handle) in handles {
        let result = handle
            .await
            .map_err(|e| anyhow!("Task {task_id} panicked: {e}"))
            .and_then(|r| r.with_context(|| format!("Task {task_id} failed")));
        match result {
            Ok(task_metrics) => metrics.push(task_metrics),
            Err(e) => {
                error!("{e:#}");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    if let Some(writer) = writer {
        let written = writer
            .await
            .context("Output writer panicked")?
            .context("Failed to write records to stdout")?;
        info!("Wrote {} records to stdout", written);
    }

    if let Some(e) = first_error {
        return Err(e);
    }

    job.post()?;
    job.destroy()?;

    let report = JobReport::new(metrics, start.elapsed());
    info!(
        "Job complete: {} tasks, {} rows in {:.2}s",
        report.tasks.len(),
        report.total_rows(),
        report.wall_clock.as_secs_f64()
    );
    Ok(report)
}

fn spawn_task(
    task_id: usize,
    spec: JobSpec,
    mut consumer: BoxedConsumer,
    cancel: Arc<AtomicBool>,
) -> JoinHandle<anyhow::Result<TaskMetrics>> {
    tokio::task::spawn_blocking(move || {
        let mut task = ReaderTask::init(task_id, spec).with_cancel_flag(cancel);
        task.prepare()?;
        let metrics = task.start_read(&mut *consumer)?;
        task.post()?;
        task.destroy()?;
        Ok(metrics)
    })
}
