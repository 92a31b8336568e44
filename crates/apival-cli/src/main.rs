//! apival CLI - Main Entry Point
//!
//! Compares expected JSON output against what an API actually produced, and
//! renders saved validation service responses.

use anyhow::{Context, Result};
use apival_cli::config::AppConfig;
use apival_cli::output::{self, OutputFormat, RenderOptions};
use apival_compare::{compare_with_limit, ComparisonRecord, ComparisonSummary, Value};
use apival_report::{load_json, load_report, InputSource};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Expected-vs-generated API response comparison
#[derive(Parser)]
#[command(name = "apival")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format [env: APIVAL_FORMAT]
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Show path and match columns [env: APIVAL_SHOW_PATHS]
    #[arg(long, global = true)]
    show_paths: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long, global = true)]
    no_color: bool,

    /// Reject expected documents nested deeper than this [env: APIVAL_MAX_DEPTH]
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare an expected JSON document against an actual one
    Compare {
        /// Expected document (path, or `-` for stdin)
        expected: InputSource,

        /// Actual document (path, or `-` for stdin)
        actual: InputSource,

        /// Exit with status 1 when any value mismatches
        #[arg(long)]
        fail_on_mismatch: bool,
    },

    /// Render a saved validation service response
    Report {
        /// Response document (path, or `-` for stdin)
        file: InputSource,

        /// Exit with status 1 when the validation failed
        #[arg(long)]
        fail_on_mismatch: bool,
    },

    /// Pretty-print a saved validation service response
    Raw {
        /// Response document (path, or `-` for stdin)
        file: InputSource,
    },
}

/// Settings after applying command-line overrides to the environment config
struct Settings {
    format: OutputFormat,
    max_depth: usize,
    options: RenderOptions,
}

impl Settings {
    fn resolve(cli: &Cli, config: AppConfig) -> Self {
        let mut options = config.render_options();
        options.show_paths |= cli.show_paths;
        options.color &= !cli.no_color;

        Self {
            format: cli.format.unwrap_or(config.format),
            max_depth: cli.max_depth.unwrap_or(config.max_depth),
            options,
        }
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let settings = Settings::resolve(&cli, AppConfig::from_env());
    if !settings.options.color {
        colored::control::set_override(false);
    }

    match &cli.command {
        Commands::Compare {
            expected,
            actual,
            fail_on_mismatch,
        } => {
            anyhow::ensure!(
                !(*expected == InputSource::Stdin && *actual == InputSource::Stdin),
                "only one of the expected and actual documents can be read from stdin"
            );
            let expected_value = load_json(expected)
                .with_context(|| format!("loading expected document {}", expected))?;
            let actual_value = load_json(actual)
                .with_context(|| format!("loading actual document {}", actual))?;

            let records = guarded_compare(&expected_value, &actual_value, settings.max_depth)?;
            let rendered = output::render_records(&records, settings.format, settings.options)
                .context("rendering comparison")?;
            emit(&rendered)?;

            Ok(exit_code(*fail_on_mismatch, &records, false))
        }
        Commands::Report {
            file,
            fail_on_mismatch,
        } => {
            let report = load_report(file)
                .with_context(|| format!("loading validation response {}", file))?;
            info!(
                "Loaded report {} for '{}': {}",
                report.test_id, report.endpoint, report.validation
            );

            let records = report
                .comparison_with_limit(settings.max_depth)
                .context("refusing to compare expected output")?;
            let rendered =
                output::render_report(&report, &records, settings.format, settings.options)
                    .context("rendering validation response")?;
            emit(&rendered)?;

            Ok(exit_code(*fail_on_mismatch, &records, report.is_failed()))
        }
        Commands::Raw { file } => {
            let report = load_report(file)
                .with_context(|| format!("loading validation response {}", file))?;
            let rendered = output::render_raw(&report).context("rendering validation response")?;
            emit(&rendered)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn guarded_compare(
    expected: &Value,
    actual: &Value,
    max_depth: usize,
) -> Result<Vec<ComparisonRecord>> {
    let records = compare_with_limit(expected, actual, max_depth)
        .context("refusing to compare expected document")?;
    debug!("Produced {} comparison records", records.len());
    Ok(records)
}

fn exit_code(fail_on_mismatch: bool, records: &[ComparisonRecord], failed: bool) -> ExitCode {
    let summary = ComparisonSummary::from_records(records);
    if fail_on_mismatch && (failed || !summary.all_matched()) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn emit(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
