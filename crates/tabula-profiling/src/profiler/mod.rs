//! Column profiling for dataset inspection.
//!
//! This module computes, for every column of a dataset:
//! - Missing-value statistics (count and percentage)
//! - Presence and distinct-value counts
//!
//! Each column is profiled independently of the others; the combined
//! report is assembled into one explicit record per column rather than
//! joined from intermediate tables.

mod missing;
mod uniqueness;

use crate::config::ProfilerConfig;
use crate::error::{ProfilingError, Result};
use crate::types::{ColumnReport, DatasetReport};
use polars::prelude::*;
use std::collections::HashSet;
use tracing::{debug, info};

// Re-export for internal use
pub(crate) use missing::{count_missing, percent_missing};
pub(crate) use uniqueness::{count_unique_present, present_count};

/// Column profiler computing missing-value and uniqueness statistics.
pub struct ColumnProfiler {
    config: ProfilerConfig,
}

impl Default for ColumnProfiler {
    fn default() -> Self {
        Self::new(ProfilerConfig::default())
    }
}

impl ColumnProfiler {
    /// Create a profiler with the given configuration.
    pub fn new(config: ProfilerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Profile an entire dataset.
    ///
    /// Produces one [`ColumnReport`] per input column, in the dataset's
    /// original column order. Fails atomically before computing anything
    /// if column names are not unique. A dataset with zero columns or
    /// zero rows is valid input; the input is never mutated.
    pub fn profile(&self, df: &DataFrame) -> Result<DatasetReport> {
        // Configs deserialized from outside bypass the builder's validation
        self.config
            .validate()
            .map_err(|e| ProfilingError::InvalidConfig(e.to_string()))?;

        let names: Vec<&str> = df
            .get_column_names()
            .into_iter()
            .map(|s| s.as_str())
            .collect();
        validate_unique_names(&names)?;

        let row_count = df.height();
        let mut columns = Vec::with_capacity(df.width());
        for col in df.get_columns() {
            let series = col.as_materialized_series();
            columns.push(self.profile_column(series, row_count)?);
        }

        info!(
            "Profiled {} columns over {} rows",
            columns.len(),
            row_count
        );

        Ok(DatasetReport {
            shape: (row_count, df.width()),
            columns,
        })
    }

    fn profile_column(&self, series: &Series, row_count: usize) -> Result<ColumnReport> {
        let total_missing = count_missing(series, &self.config)?;
        let percent_missing = percent_missing(total_missing, row_count);
        let total_present = present_count(row_count, total_missing);
        let unique_count = count_unique_present(series, &self.config)?;

        debug!(
            "Column '{}': {} missing, {} present, {} unique",
            series.name(),
            total_missing,
            total_present,
            unique_count
        );

        Ok(ColumnReport {
            name: series.name().to_string(),
            dtype: format!("{:?}", series.dtype()),
            total_missing,
            percent_missing,
            total_present,
            unique_count,
        })
    }
}

/// Reject datasets whose column names collide.
///
/// A report is keyed by column name; a duplicate would overwrite an
/// earlier column's entry, so it is an input error, not a merge.
fn validate_unique_names(names: &[&str]) -> Result<()> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(*name) {
            return Err(ProfilingError::DuplicateColumn((*name).to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(df: &DataFrame) -> DatasetReport {
        ColumnProfiler::default().profile(df).unwrap()
    }

    // ==================== scenario tests ====================

    #[test]
    fn test_mixed_missing_columns() {
        let df = df![
            "a" => [Some(1i64), None, Some(3)],
            "b" => [None::<i64>, None, Some(4)],
        ]
        .unwrap();

        let report = profile(&df);
        assert_eq!(report.shape, (3, 2));

        let a = report.column("a").unwrap();
        assert_eq!(a.total_missing, 1);
        assert!((a.percent_missing - 33.33).abs() < 0.01);
        assert_eq!(a.total_present, 2);
        assert_eq!(a.unique_count, 2);

        let b = report.column("b").unwrap();
        assert_eq!(b.total_missing, 2);
        assert!((b.percent_missing - 66.67).abs() < 0.01);
        assert_eq!(b.total_present, 1);
        assert_eq!(b.unique_count, 1);
    }

    #[test]
    fn test_empty_dataset_yields_empty_report() {
        let df = DataFrame::empty();

        let report = profile(&df);
        assert_eq!(report.shape, (0, 0));
        assert!(report.is_empty());
    }

    #[test]
    fn test_constant_column() {
        let df = df!["x" => [5i64, 5, 5]].unwrap();

        let report = profile(&df);
        let x = report.column("x").unwrap();
        assert_eq!(x.total_missing, 0);
        assert_eq!(x.percent_missing, 0.0);
        assert_eq!(x.total_present, 3);
        assert_eq!(x.unique_count, 1);
    }

    #[test]
    fn test_missing_ranking_worst_first() {
        let df = df![
            "q" => [None::<i64>, None, Some(1), Some(2), Some(3), Some(4)],
            "p" => [None::<i64>, None, None, None, None, Some(9)],
        ]
        .unwrap();

        let report = profile(&df);
        assert_eq!(report.column("p").unwrap().total_missing, 5);
        assert_eq!(report.column("q").unwrap().total_missing, 2);

        let ranked: Vec<&str> = report
            .ranked_by_missing()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(ranked, vec!["p", "q"]);
    }

    // ==================== edge cases ====================

    #[test]
    fn test_zero_rows_dataset() {
        let df = df![
            "a" => Vec::<i64>::new(),
            "b" => Vec::<String>::new(),
        ]
        .unwrap();

        let report = profile(&df);
        assert_eq!(report.shape, (0, 2));
        for col in &report.columns {
            assert_eq!(col.total_missing, 0);
            assert_eq!(col.total_present, 0);
            assert_eq!(col.unique_count, 0);
            assert!(col.percent_is_undefined());
        }
    }

    #[test]
    fn test_all_missing_column() {
        let df = df!["a" => [None::<i64>, None, None, None]].unwrap();

        let report = profile(&df);
        let a = report.column("a").unwrap();
        assert_eq!(a.total_missing, 4);
        assert_eq!(a.percent_missing, 100.0);
        assert_eq!(a.total_present, 0);
        assert_eq!(a.unique_count, 0);
    }

    #[test]
    fn test_nan_counts_as_missing_by_default() {
        let df = df!["f" => [Some(1.0f64), Some(f64::NAN), None, Some(1.0)]].unwrap();

        let report = profile(&df);
        let f = report.column("f").unwrap();
        assert_eq!(f.total_missing, 2);
        assert_eq!(f.total_present, 2);
        assert_eq!(f.unique_count, 1);
    }

    #[test]
    fn test_nan_policy_disabled() {
        let profiler = ColumnProfiler::new(
            ProfilerConfig::builder().nan_is_missing(false).build().unwrap(),
        );
        let df = df!["f" => [Some(1.0f64), Some(f64::NAN), None, Some(1.0)]].unwrap();

        let report = profiler.profile(&df).unwrap();
        let f = report.column("f").unwrap();
        assert_eq!(f.total_missing, 1);
        assert_eq!(f.total_present, 3);
        assert_eq!(f.unique_count, 2);
    }

    // ==================== invariants ====================

    #[test]
    fn test_partition_and_bound_invariants() {
        let df = df![
            "i" => [Some(1i64), None, Some(3), Some(3), None],
            "s" => [Some("x"), Some("y"), None, Some("x"), Some("z")],
            "f" => [Some(1.5f64), Some(f64::NAN), Some(2.5), None, Some(1.5)],
            "b" => [Some(true), Some(false), Some(true), None, None],
        ]
        .unwrap();

        let report = profile(&df);
        assert_eq!(report.len(), 4);
        for col in &report.columns {
            assert_eq!(col.total_missing + col.total_present, df.height());
            assert!(col.unique_count <= col.total_present);
            assert!((0.0..=100.0).contains(&col.percent_missing));
        }

        // Missing ranking is non-increasing across consecutive entries
        let ranked = report.ranked_by_missing();
        for pair in ranked.windows(2) {
            assert!(pair[0].total_missing >= pair[1].total_missing);
        }

        // Uniqueness section order equals the input column order
        let original: Vec<&str> = report.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(original, vec!["i", "s", "f", "b"]);
    }

    // ==================== validation ====================

    #[test]
    fn test_duplicate_names_rejected() {
        let err = validate_unique_names(&["a", "b", "a"]).unwrap_err();
        assert!(matches!(err, ProfilingError::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn test_invalid_config_rejected_at_entry() {
        let config = ProfilerConfig {
            percent_precision: 99,
            ..ProfilerConfig::default()
        };
        let df = df!["x" => [1i64, 2, 3]].unwrap();

        let err = ColumnProfiler::new(config).profile(&df).unwrap_err();
        assert!(matches!(err, ProfilingError::InvalidConfig(_)));
    }

    #[test]
    fn test_unique_names_accepted() {
        assert!(validate_unique_names(&["a", "b", "c"]).is_ok());
        assert!(validate_unique_names(&[]).is_ok());
    }
}
