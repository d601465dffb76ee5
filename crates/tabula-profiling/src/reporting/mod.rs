//! Report rendering module.
//!
//! This module turns a [`DatasetReport`](crate::types::DatasetReport) into
//! output for human or machine consumption:
//! - a plain-text table view (default CLI output)
//! - JSON to stdout (`--json` CLI flag)
//! - a JSON file on disk (`--emit-report` CLI flag)
//!
//! # Example
//!
//! ```rust,ignore
//! use tabula_profiling::reporting::ReportGenerator;
//! use std::path::PathBuf;
//!
//! let report = profiler.profile(&df)?;
//!
//! // Print the table view
//! println!("{}", ReportGenerator::render_text(&report, 2));
//!
//! // Or write a JSON report to disk
//! let generator = ReportGenerator::new(PathBuf::from("outputs"), None);
//! generator.write_report_to_file(&report, "train")?;
//! ```

mod generator;

pub use generator::ReportGenerator;
