use crate::cli::args::OutputFormat;
use crate::core::power::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::domain::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// MiniCalc configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Default output format
    #[serde(default)]
    pub output: OutputFormat,
    /// Fractional digits used when rendering real numbers
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Exit with non-zero status on usage and parse errors
    #[serde(default)]
    pub strict_exit_codes: bool,
}

/// Partial global settings as read from a single file.
///
/// Only keys present in the file override what was loaded before it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalOverrides {
    pub log_level: Option<String>,
    pub output: Option<OutputFormat>,
    pub precision: Option<usize>,
    pub strict_exit_codes: Option<bool>,
}

/// On-disk shape of a config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub global: GlobalOverrides,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputFormat::default(),
            precision: default_precision(),
            strict_exit_codes: false,
        }
    }
}

impl GlobalConfig {
    /// Apply the keys set in `overrides` on top of this configuration.
    ///
    /// An out-of-range precision is rejected and leaves `self` untouched.
    pub fn merge(&mut self, overrides: GlobalOverrides) -> CalcResult<()> {
        if let Some(precision) = overrides.precision {
            if precision > MAX_PRECISION {
                return Err(CalcError::Config {
                    message: format!(
                        "precision {} is out of range (0..={})",
                        precision, MAX_PRECISION
                    ),
                });
            }
        }

        if let Some(log_level) = overrides.log_level {
            self.log_level = log_level;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(precision) = overrides.precision {
            self.precision = precision;
        }
        if let Some(strict) = overrides.strict_exit_codes {
            self.strict_exit_codes = strict;
        }
        Ok(())
    }
}
