use crate::error::{ProfilingError, Result};
use serde::{Deserialize, Serialize};

/// Missing-value and uniqueness statistics for a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnReport {
    pub name: String,
    pub dtype: String,
    /// Count of missing cells (nulls, plus NaN / empty strings per config).
    pub total_missing: usize,
    /// `total_missing / row_count * 100`. NaN when the dataset has zero
    /// rows; serializes to JSON null.
    pub percent_missing: f64,
    /// Count of non-missing cells. Always `row_count - total_missing`.
    pub total_present: usize,
    /// Count of distinct values among present cells.
    pub unique_count: usize,
}

impl ColumnReport {
    /// Whether the missing percentage is undefined (zero-row dataset).
    pub fn percent_is_undefined(&self) -> bool {
        self.percent_missing.is_nan()
    }
}

/// Complete profile of one dataset: one [`ColumnReport`] per input column.
///
/// `columns` preserves the dataset's original column order, which is the
/// order the uniqueness section of a rendered report uses. The missing
/// section ranks columns by [`DatasetReport::ranked_by_missing`] instead,
/// surfacing the worst offenders first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetReport {
    /// (rows, columns) of the profiled dataset.
    pub shape: (usize, usize),
    /// Per-column statistics in original column order.
    pub columns: Vec<ColumnReport>,
}

impl DatasetReport {
    /// Number of profiled columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the report covers no columns at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look up a column's report by name.
    pub fn column(&self, name: &str) -> Option<&ColumnReport> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Look up a column's report by name, failing if absent.
    pub fn require(&self, name: &str) -> Result<&ColumnReport> {
        self.column(name)
            .ok_or_else(|| ProfilingError::ColumnNotFound(name.to_string()))
    }

    /// Column reports ranked by `total_missing`, descending.
    ///
    /// The sort is stable: columns with equal missing counts keep their
    /// original dataset order.
    pub fn ranked_by_missing(&self) -> Vec<&ColumnReport> {
        let mut ranked: Vec<&ColumnReport> = self.columns.iter().collect();
        ranked.sort_by(|a, b| b.total_missing.cmp(&a.total_missing));
        ranked
    }
}
