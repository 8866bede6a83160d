//! Per-task metrics and the aggregated run report.

use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use serde::Serialize;
use std::time::Duration;

/// Outcome of one task's emission run.
#[derive(Debug, Clone, Serialize)]
pub struct TaskMetrics {
    pub task_id: usize,
    pub rows_sent: u64,
    /// Records synthesized; 1 when the job has no random column
    pub records_built: u64,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
    /// Stopped early by a cancellation request
    pub cancelled: bool,
}

impl TaskMetrics {
    /// Throughput, or `None` for a zero-length run.
    pub fn rows_per_second(&self) -> Option<f64> {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            Some(self.rows_sent as f64 / secs)
        } else {
            None
        }
    }
}

/// Metrics from every task of one job run.
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub tasks: Vec<TaskMetrics>,
    /// Wall clock for the whole run, tasks in parallel
    pub wall_clock: Duration,
}

impl JobReport {
    pub fn new(mut tasks: Vec<TaskMetrics>, wall_clock: Duration) -> Self {
        tasks.sort_by_key(|t| t.task_id);
        Self { tasks, wall_clock }
    }

    pub fn total_rows(&self) -> u64 {
        self.tasks.iter().map(|t| t.rows_sent).sum()
    }

    pub fn total_records_built(&self) -> u64 {
        self.tasks.iter().map(|t| t.records_built).sum()
    }

    pub fn any_cancelled(&self) -> bool {
        self.tasks.iter().any(|t| t.cancelled)
    }

    /// Aggregate throughput over the wall clock.
    pub fn rows_per_second(&self) -> Option<f64> {
        let secs = self.wall_clock.as_secs_f64();
        if secs > 0.0 {
            Some(self.total_rows() as f64 / secs)
        } else {
            None
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render the report as a table.
    pub fn format_table(&self) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Task", "Rows", "Built", "Duration", "Rows/sec", "Status"]);

        for task in &self.tasks {
            let status_cell = if task.cancelled {
                Cell::new("CANCELLED").fg(Color::Yellow)
            } else {
                Cell::new("OK").fg(Color::Green)
            };

            table.add_row(vec![
                Cell::new(task.task_id),
                Cell::new(format_number(task.rows_sent)),
                Cell::new(format_number(task.records_built)),
                Cell::new(format_duration(task.duration.as_secs_f64())),
                Cell::new(format_rate(task.rows_per_second())),
                status_cell,
            ]);
        }

        table.add_row(vec![
            Cell::new("TOTAL").fg(Color::Cyan),
            Cell::new(format_number(self.total_rows())),
            Cell::new(format_number(self.total_records_built())),
            Cell::new(format!("{}*", format_duration(self.wall_clock.as_secs_f64()))),
            Cell::new(format_rate(self.rows_per_second())),
            Cell::new(format!("{} tasks", self.tasks.len())),
        ]);

        let mut output = table.to_string();
        output.push_str("\n* Wall clock (parallel)\n");
        output
    }
}

fn format_rate(rate: Option<f64>) -> String {
    rate.map(|r| format!("{r:.1}"))
        .unwrap_or_else(|| "-".to_string())
}

fn format_duration(secs: f64) -> String {
    if secs < 60.0 {
        format!("{secs:.2}s")
    } else if secs < 3600.0 {
        let mins = (secs / 60.0).floor();
        format!("{}m {:02.0}s", mins as u64, secs - mins * 60.0)
    } else {
        let hours = (secs / 3600.0).floor();
        let mins = ((secs - hours * 3600.0) / 60.0).floor();
        format!("{}h {:02}m", hours as u64, mins as u64)
    }
}

/// Format number with thousands separators.
fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
