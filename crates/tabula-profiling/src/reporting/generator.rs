use crate::error::{ProfilingError, Result};
use crate::types::DatasetReport;
use crate::utils::truncate_str;
use chrono::Local;
use serde_json::json;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tracing::info;

/// Renders profiling reports as text tables or JSON documents.
pub struct ReportGenerator {
    output_dir: PathBuf,
    output_name: Option<String>,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./outputs"),
            output_name: None,
        }
    }
}

impl ReportGenerator {
    /// Create a new ReportGenerator with custom output settings.
    pub fn new(output_dir: PathBuf, output_name: Option<String>) -> Self {
        Self {
            output_dir,
            output_name,
        }
    }

    /// Render the combined table view of a report.
    ///
    /// Two juxtaposed sections: the missing-value table ranked by
    /// `total_missing` descending (worst offenders first), and the
    /// uniqueness table in the dataset's original column order so it can
    /// be read against the source schema.
    pub fn render_text(report: &DatasetReport, percent_precision: u8) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", "=".repeat(70));
        let _ = writeln!(
            out,
            "COLUMN PROFILE ({} rows x {} columns)",
            report.shape.0, report.shape.1
        );
        let _ = writeln!(out, "{}", "=".repeat(70));
        let _ = writeln!(out);

        let _ = writeln!(out, "MISSING VALUES (worst first)");
        let _ = writeln!(out, "{}", "-".repeat(46));
        let _ = writeln!(out, "{:<22} {:<12} {:<12}", "Column", "Missing", "Percent");
        for col in report.ranked_by_missing() {
            let percent = if col.percent_is_undefined() {
                "undefined".to_string()
            } else {
                format!("{:.*}", percent_precision as usize, col.percent_missing)
            };
            let _ = writeln!(
                out,
                "{:<22} {:<12} {:<12}",
                truncate_str(&col.name, 21),
                col.total_missing,
                percent
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "UNIQUE VALUES (original column order)");
        let _ = writeln!(out, "{}", "-".repeat(46));
        let _ = writeln!(out, "{:<22} {:<12} {:<12}", "Column", "Present", "Unique");
        for col in &report.columns {
            let _ = writeln!(
                out,
                "{:<22} {:<12} {:<12}",
                truncate_str(&col.name, 21),
                col.total_present,
                col.unique_count
            );
        }

        out
    }

    /// Serialize a report to pretty JSON.
    ///
    /// Column entries appear in original order; `missing_ranking` carries
    /// the descending-missing view as a list of column names. Undefined
    /// percentages (zero-row input) serialize as null.
    pub fn to_json(report: &DatasetReport) -> Result<String> {
        let missing_ranking: Vec<&str> = report
            .ranked_by_missing()
            .iter()
            .map(|c| c.name.as_str())
            .collect();

        let doc = json!({
            "generated_at": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            "shape": {
                "rows": report.shape.0,
                "columns": report.shape.1,
            },
            "columns": report.columns,
            "missing_ranking": missing_ranking,
        });

        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// Write the JSON report to `<output_dir>/<stem>_profile.json`.
    ///
    /// The configured `output_name` overrides `stem` when set.
    pub fn write_report_to_file(&self, report: &DatasetReport, stem: &str) -> Result<PathBuf> {
        let file_stem = self.output_name.as_deref().unwrap_or(stem);

        fs::create_dir_all(&self.output_dir).map_err(|e| {
            ProfilingError::ReportGenerationFailed(format!(
                "cannot create {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;
        let report_path = self.output_dir.join(format!("{}_profile.json", file_stem));
        let mut file = File::create(&report_path)?;
        file.write_all(Self::to_json(report)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}
