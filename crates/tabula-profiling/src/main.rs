//! CLI entry point for the column profiler.

use anyhow::{Result, anyhow};
use clap::Parser;
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::Path;
use tabula_profiling::{ColumnProfiler, ProfilerConfig, ReportGenerator};
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(
    author = "Tabula Team",
    version,
    about = "Column-level missing-value and uniqueness profiler",
    long_about = "Profile a tabular dataset before modeling: per-column missing counts,\n\
                  missing percentages, present counts, and distinct-value counts.\n\n\
                  EXAMPLES:\n  \
                  # Table view on stdout\n  \
                  tabula-profiling -i data.csv\n\n  \
                  # Machine-readable output\n  \
                  tabula-profiling -i data.csv --json | jq .missing_ranking\n\n  \
                  # Write a JSON report next to other outputs\n  \
                  tabula-profiling -i data.csv -o results/ --emit-report"
)]
struct Args {
    /// Path to the CSV file to profile
    #[arg(short, long)]
    input: String,

    /// Output directory for written reports
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Custom report file name (without extension)
    ///
    /// If not specified, uses the input file stem
    #[arg(long)]
    output_name: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Count float NaN cells as present values instead of missing
    #[arg(long)]
    keep_nan: bool,

    /// Count empty strings as missing values
    #[arg(long)]
    empty_as_missing: bool,

    /// Decimal places for rendered percentages
    #[arg(long, default_value = "2")]
    precision: u8,

    /// Output JSON to stdout instead of the table view
    ///
    /// Disables all progress logs; only outputs the final JSON report.
    #[arg(long)]
    json: bool,

    /// Write a JSON report to the output directory
    ///
    /// The report will be saved as <input_name>_profile.json
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !Path::new(&args.input).exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    let config = ProfilerConfig::builder()
        .nan_is_missing(!args.keep_nan)
        .empty_string_is_missing(args.empty_as_missing)
        .percent_precision(args.precision)
        .output_dir(&args.output)
        .build()?;
    let precision = config.percent_precision;

    info!("Loading dataset from: {}", args.input);
    let data = load_csv_with_fallbacks(&args.input)?;
    info!("Dataset loaded: {:?}", data.shape());

    let report = match ColumnProfiler::new(config).profile(&data) {
        Ok(report) => report,
        Err(e) => {
            error!("Profiling failed: {}", e);
            return Err(anyhow!("Profiling failed: {}", e));
        }
    };

    if args.json {
        println!("{}", ReportGenerator::to_json(&report)?);
        return Ok(());
    }

    if args.emit_report {
        let generator = ReportGenerator::new(
            std::path::PathBuf::from(&args.output),
            args.output_name.clone(),
        );
        let report_path = generator.write_report_to_file(&report, &extract_file_stem(&args.input))?;
        info!("Report written to: {}", report_path.display());
    }

    // Default human-readable output; always visible regardless of log level
    println!("{}", ReportGenerator::render_text(&report, precision));

    Ok(())
}

/// Extract the file stem (name without extension) from a path.
fn extract_file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}

/// Load CSV with multiple fallback strategies
fn load_csv_with_fallbacks(path: &str) -> Result<DataFrame> {
    use std::path::PathBuf;

    // Strategy 1: Standard loading with quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Standard loading failed: {}", e);
        }
    }

    // Strategy 2: Without quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Loading without quotes failed: {}", e);
        }
    }

    // Strategy 3: Pre-clean content
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cleaned = clean_csv_content(&content);
            use std::io::Cursor;
            let cursor = Cursor::new(cleaned);

            CsvReadOptions::default()
                .with_infer_schema_length(Some(100))
                .with_has_header(true)
                .into_reader_with_file_handle(cursor)
                .finish()
                .map_err(|e| e.into())
        }
        Err(e) => {
            error!("Could not read file: {}", e);
            Err(e.into())
        }
    }
}

/// Clean CSV content
fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
