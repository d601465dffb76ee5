//! Column Profiling Library
//!
//! A small, polars-backed profiling library for exploratory data analysis.
//!
//! # Overview
//!
//! Given a tabular dataset, this library computes per column:
//!
//! - **Missing-value statistics**: total missing cells and percent missing
//! - **Uniqueness statistics**: present (non-missing) cells and distinct values
//!
//! The combined report juxtaposes two orderings: the missing-value view is
//! ranked by missing count descending to surface the worst-offending
//! columns first, while the uniqueness view preserves the dataset's
//! original column order for easy cross-reference against the schema.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tabula_profiling::{ColumnProfiler, ProfilerConfig, ReportGenerator};
//! use polars::prelude::*;
//!
//! // Load data (any source that yields a DataFrame)
//! let df = CsvReader::from_path("data.csv")?.finish()?;
//!
//! // Option 1: default missing-value semantics (nulls and float NaN)
//! let report = ColumnProfiler::default().profile(&df)?;
//! println!("{}", ReportGenerator::render_text(&report, 2));
//!
//! // Option 2: customized predicate
//! let config = ProfilerConfig::builder()
//!     .nan_is_missing(false)
//!     .empty_string_is_missing(true)
//!     .build()?;
//!
//! let report = ColumnProfiler::new(config).profile(&df)?;
//! for col in report.ranked_by_missing() {
//!     println!("{}: {} missing", col.name, col.total_missing);
//! }
//! ```
//!
//! # Missing-value semantics
//!
//! A cell is missing when it is a polars null. For float columns, NaN cells
//! also count as missing by default ([`ProfilerConfig::nan_is_missing`]);
//! for string columns, empty strings count only when opted in via
//! [`ProfilerConfig::empty_string_is_missing`]. Distinct-value counting
//! applies the same predicate, so excluded cells never form a distinct
//! value.
//!
//! The profiler is a pure function of its input: the DataFrame is never
//! mutated and the report holds no reference back to it.

pub mod config;
pub mod error;
pub mod profiler;
pub mod reporting;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{ConfigValidationError, ProfilerConfig, ProfilerConfigBuilder};
pub use error::{ProfilingError, Result as ProfilingResult, ResultExt};
pub use profiler::ColumnProfiler;
pub use reporting::ReportGenerator;
pub use types::{ColumnReport, DatasetReport};
pub use utils::{is_float_dtype, is_string_dtype, truncate_str};
