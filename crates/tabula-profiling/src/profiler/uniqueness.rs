//! Presence and distinct-value statistics for a single column.

use crate::config::ProfilerConfig;
use crate::error::Result;
use polars::prelude::*;
use std::collections::HashSet;

/// Count of non-missing cells. The two tallies always partition the column.
pub(crate) fn present_count(row_count: usize, total_missing: usize) -> usize {
    row_count - total_missing
}

/// Count the distinct values among the present cells of a column.
///
/// Cells excluded by the missing predicate (nulls, and NaN / empty strings
/// per config) never contribute a distinct value. The filtered float and
/// string cases aggregate through an explicit hash-set; everything else
/// defers to polars after dropping nulls.
pub(crate) fn count_unique_present(series: &Series, config: &ProfilerConfig) -> Result<usize> {
    let non_null = series.drop_nulls();

    match non_null.dtype() {
        DataType::Float64 if config.nan_is_missing => {
            let distinct: HashSet<u64> = non_null
                .f64()?
                .into_iter()
                .flatten()
                .filter(|v| !v.is_nan())
                // fold -0.0 into 0.0: equal values, distinct bit patterns
                .map(|v| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() })
                .collect();
            Ok(distinct.len())
        }
        DataType::Float32 if config.nan_is_missing => {
            let distinct: HashSet<u32> = non_null
                .f32()?
                .into_iter()
                .flatten()
                .filter(|v| !v.is_nan())
                .map(|v| if v == 0.0 { 0.0f32.to_bits() } else { v.to_bits() })
                .collect();
            Ok(distinct.len())
        }
        DataType::String if config.empty_string_is_missing => {
            let distinct: HashSet<&str> = non_null
                .str()?
                .into_iter()
                .flatten()
                .filter(|v| !v.is_empty())
                .collect();
            Ok(distinct.len())
        }
        _ => Ok(non_null.n_unique()?),
    }
}
