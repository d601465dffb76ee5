//! Missing-value statistics for a single column.

use crate::config::ProfilerConfig;
use crate::error::Result;
use crate::utils::{is_float_dtype, is_string_dtype};
use polars::prelude::*;

/// Count the missing cells in a column.
///
/// Nulls are always missing. Float NaN and empty strings widen the count
/// according to the configured missing predicate.
pub(crate) fn count_missing(series: &Series, config: &ProfilerConfig) -> Result<usize> {
    let mut missing = series.null_count();

    if config.nan_is_missing && is_float_dtype(series.dtype()) {
        // NaN cells are not nulls in polars, so they never double-count
        missing += match series.dtype() {
            DataType::Float32 => series
                .f32()?
                .into_iter()
                .flatten()
                .filter(|v| v.is_nan())
                .count(),
            _ => series
                .f64()?
                .into_iter()
                .flatten()
                .filter(|v| v.is_nan())
                .count(),
        };
    }

    if config.empty_string_is_missing && is_string_dtype(series.dtype()) {
        missing += series
            .str()?
            .into_iter()
            .flatten()
            .filter(|v| v.is_empty())
            .count();
    }

    Ok(missing)
}

/// Missing cells as a percentage of the row count.
///
/// Undefined (NaN) for a zero-row dataset rather than an error, so a
/// report over an empty table stays inspectable.
pub(crate) fn percent_missing(total_missing: usize, row_count: usize) -> f64 {
    if row_count == 0 {
        f64::NAN
    } else {
        (total_missing as f64 / row_count as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== count_missing tests ====================

    #[test]
    fn test_count_missing_nulls_only() {
        let config = ProfilerConfig::default();
        let series = Series::new("val".into(), &[Some(1i64), None, Some(3), None]);
        assert_eq!(count_missing(&series, &config).unwrap(), 2);
    }

    #[test]
    fn test_count_missing_includes_nan_by_default() {
        let config = ProfilerConfig::default();
        let series = Series::new("val".into(), &[Some(1.0f64), Some(f64::NAN), None]);
        assert_eq!(count_missing(&series, &config).unwrap(), 2);
    }

    #[test]
    fn test_count_missing_nan_kept_when_disabled() {
        let config = ProfilerConfig::builder()
            .nan_is_missing(false)
            .build()
            .unwrap();
        let series = Series::new("val".into(), &[Some(1.0f64), Some(f64::NAN), None]);
        assert_eq!(count_missing(&series, &config).unwrap(), 1);
    }

    #[test]
    fn test_count_missing_f32_nan() {
        let config = ProfilerConfig::default();
        let series = Series::new("val".into(), &[Some(1.0f32), Some(f32::NAN), Some(2.0)]);
        assert_eq!(count_missing(&series, &config).unwrap(), 1);
    }

    #[test]
    fn test_count_missing_empty_string_opt_in() {
        let series = Series::new("val".into(), &[Some("a"), Some(""), None]);

        let default_config = ProfilerConfig::default();
        assert_eq!(count_missing(&series, &default_config).unwrap(), 1);

        let strict = ProfilerConfig::builder()
            .empty_string_is_missing(true)
            .build()
            .unwrap();
        assert_eq!(count_missing(&series, &strict).unwrap(), 2);
    }

    #[test]
    fn test_count_missing_empty_series() {
        let config = ProfilerConfig::default();
        let series: Series = Series::new("val".into(), Vec::<f64>::new());
        assert_eq!(count_missing(&series, &config).unwrap(), 0);
    }

    // ==================== percent_missing tests ====================

    #[test]
    fn test_percent_missing_basic() {
        assert!((percent_missing(1, 3) - 33.33).abs() < 0.01);
        assert!((percent_missing(2, 3) - 66.67).abs() < 0.01);
        assert_eq!(percent_missing(0, 3), 0.0);
        assert_eq!(percent_missing(3, 3), 100.0);
    }

    #[test]
    fn test_percent_missing_zero_rows_is_undefined() {
        assert!(percent_missing(0, 0).is_nan());
    }
}
