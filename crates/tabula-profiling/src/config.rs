//! Configuration types for the column profiler.
//!
//! This module provides configuration options using the builder pattern
//! for flexible and ergonomic profiler setup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the column profiler.
///
/// Use [`ProfilerConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use tabula_profiling::config::ProfilerConfig;
///
/// let config = ProfilerConfig::builder()
///     .nan_is_missing(false)
///     .percent_precision(1)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilerConfig {
    /// Whether NaN cells in float columns count as missing.
    /// Nulls are always missing regardless of this setting.
    /// Default: true
    pub nan_is_missing: bool,

    /// Whether empty strings in string columns count as missing.
    /// Default: false
    pub empty_string_is_missing: bool,

    /// Decimal places used when rendering missing percentages.
    /// Default: 2
    pub percent_precision: u8,

    /// Output directory for written reports.
    /// Default: "./outputs"
    pub output_dir: PathBuf,

    /// Custom report file stem (without extension).
    /// If None, the input file stem is used.
    /// Default: None
    pub output_name: Option<String>,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            nan_is_missing: true,
            empty_string_is_missing: false,
            percent_precision: 2,
            output_dir: PathBuf::from("./outputs"),
            output_name: None,
        }
    }
}

impl ProfilerConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ProfilerConfigBuilder {
        ProfilerConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.percent_precision > 10 {
            return Err(ConfigValidationError::InvalidPrecision(
                self.percent_precision,
            ));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid percent precision: {0} (must be at most 10)")]
    InvalidPrecision(u8),
}

/// Builder for [`ProfilerConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct ProfilerConfigBuilder {
    nan_is_missing: Option<bool>,
    empty_string_is_missing: Option<bool>,
    percent_precision: Option<u8>,
    output_dir: Option<PathBuf>,
    output_name: Option<String>,
}

impl ProfilerConfigBuilder {
    /// Set whether NaN cells in float columns count as missing.
    ///
    /// Nulls are always treated as missing; this only widens the predicate
    /// for float columns.
    pub fn nan_is_missing(mut self, missing: bool) -> Self {
        self.nan_is_missing = Some(missing);
        self
    }

    /// Set whether empty strings in string columns count as missing.
    pub fn empty_string_is_missing(mut self, missing: bool) -> Self {
        self.empty_string_is_missing = Some(missing);
        self
    }

    /// Set the decimal places used for rendered percentages.
    pub fn percent_precision(mut self, precision: u8) -> Self {
        self.percent_precision = Some(precision);
        self
    }

    /// Set the output directory for written reports.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Set a custom report file stem (without extension).
    pub fn output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `ProfilerConfig` or an error if validation fails.
    pub fn build(self) -> Result<ProfilerConfig, ConfigValidationError> {
        let config = ProfilerConfig {
            nan_is_missing: self.nan_is_missing.unwrap_or(true),
            empty_string_is_missing: self.empty_string_is_missing.unwrap_or(false),
            percent_precision: self.percent_precision.unwrap_or(2),
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from("./outputs")),
            output_name: self.output_name,
        };

        config.validate()?;
        Ok(config)
    }
}
