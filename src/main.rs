//! Command-line interface for stream-reader
//!
//! # Usage Examples
//!
//! ```bash
//! # Validate a job and print its resolved columns
//! stream-reader validate --config job.yaml
//!
//! # Emit to stdout as JSON Lines
//! stream-reader run --config job.yaml
//!
//! # Four tasks, one CSV file each, with a header row
//! stream-reader run --config job.yaml --tasks 4 --format csv --header --output-dir out/
//!
//! # Measure throughput without writing anything
//! RUST_LOG=info stream-reader run --config job.yaml --tasks 8 --format none
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::atomic::Ordering;
use stream_core::RawJobConfig;
use stream_reader::output::{column_header, OutputConfig};
use stream_reader::{run_job, OutputFormat, ReaderJob, RunArgs, RunOptions, ValidateArgs};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "stream-reader")]
#[command(about = "Generate synthetic records from a declarative column schema")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a job configuration and print the resolved columns
    Validate(ValidateArgs),

    /// Validate, split and run a job
    Run(RunArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Records go to stdout; logs stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => {
            let job = load_job(&args.config)?;
            print!("{}", job.describe());
        }
        Commands::Run(args) => run_command(args).await?,
    }

    Ok(())
}

fn load_job(path: &std::path::Path) -> anyhow::Result<ReaderJob> {
    let raw = RawJobConfig::from_file(path)
        .with_context(|| format!("Failed to load job configuration: {}", path.display()))?;
    ReaderJob::init(&raw).with_context(|| format!("Invalid job configuration: {}", path.display()))
}

async fn run_command(args: RunArgs) -> anyhow::Result<()> {
    let job = load_job(&args.config)?;

    let header = (args.header && args.format == OutputFormat::Csv)
        .then(|| column_header(job.spec().columns.len()));
    let output = OutputConfig {
        format: args.format,
        output_dir: args.output_dir,
        header,
    };
    let mut options = RunOptions::new(args.tasks, output);
    options.channel_capacity = args.channel_capacity;

    let cancel = options.cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Received Ctrl+C, stopping tasks");
            cancel.store(true, Ordering::Relaxed);
        }
    });

    info!(
        "Running {} with {} tasks",
        args.config.display(),
        args.tasks
    );
    let report_json = args.report_json.clone();
    let report = run_job(job, options).await?;
    eprint!("{}", report.format_table());

    if let Some(path) = report_json {
        let json = report.to_json().context("Failed to serialize run report")?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write run report: {}", path.display()))?;
        info!("Wrote run report to {}", path.display());
    }

    if report.any_cancelled() {
        anyhow::bail!("Run cancelled after {} rows", report.total_rows());
    }
    Ok(())
}
