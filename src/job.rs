//! Job-level lifecycle: validate once, split per task.

use crate::lifecycle::Lifecycle;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use stream_core::{validate, ColumnMode, ConfigError, JobSpec, RawJobConfig};
use tracing::info;

/// A validated reader job.
#[derive(Debug, Clone)]
pub struct ReaderJob {
    spec: JobSpec,
}

impl ReaderJob {
    /// Validate the raw configuration. Nothing is emitted for an invalid job.
    pub fn init(raw: &RawJobConfig) -> Result<Self, ConfigError> {
        let spec = validate(raw)?;
        info!(
            "Validated job: {} columns, {} rows per task",
            spec.columns.len(),
            spec.row_count
        );
        Ok(Self { spec })
    }

    pub fn spec(&self) -> &JobSpec {
        &self.spec
    }

    /// One independent copy of the job per parallel task.
    pub fn split(&self, advice_number: usize) -> Vec<JobSpec> {
        let tasks = self.spec.split(advice_number);
        info!("Split job into {} tasks", tasks.len());
        tasks
    }

    /// Resolved columns as a table.
    pub fn describe(&self) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["#", "Type", "Mode", "Value", "Date format"]);

        for (index, column) in self.spec.columns.iter().enumerate() {
            let (mode, value) = match &column.mode {
                ColumnMode::Fixed(literal) => ("fixed", literal.clone()),
                ColumnMode::Random { low, high } => ("random", format!("[{low}, {high}]")),
            };
            let date_format = column
                .date_format
                .as_ref()
                .map(|p| p.pattern().to_string())
                .unwrap_or_else(|| "-".to_string());

            table.add_row(vec![
                Cell::new(index),
                Cell::new(column.column_type),
                Cell::new(mode),
                Cell::new(value),
                Cell::new(date_format),
            ]);
        }

        format!(
            "{table}\nsliceRecordCount: {}  any random column: {}\n",
            self.spec.row_count, self.spec.has_any_random_column
        )
    }
}

impl Lifecycle for ReaderJob {}
