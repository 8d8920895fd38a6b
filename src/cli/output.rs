use crate::cli::args::OutputFormat;
use crate::core::boolean::ConjunctionReport;
use crate::core::power::{format_fixed, PowerReport};
use std::io::{self, Write};
use tabled::{Table, Tabled};

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_power(&mut self, report: &PowerReport, precision: usize) -> Result<(), OutputError>;
    fn write_conjunction(&mut self, report: &ConjunctionReport) -> Result<(), OutputError>;
    /// Write a recovered error. `kind` is only surfaced by structured formats.
    fn write_diagnostic(&mut self, kind: &str, message: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::CalcError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer
pub struct ConsoleWriter<W: Write> {
    format: OutputFormat,
    out: W,
}

impl ConsoleWriter<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(format, io::stdout())
    }
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self { format, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_json(&mut self, value: &serde_json::Value) -> Result<(), OutputError> {
        let output = serde_json::to_string_pretty(value)?;
        writeln!(self.out, "{}", output)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for ConsoleWriter<W> {
    fn write_power(&mut self, report: &PowerReport, precision: usize) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "{}", report.expression(precision))?;
            }
            OutputFormat::Json => {
                // Non-finite values have no JSON number form and become null.
                let output = serde_json::json!({
                    "base": report.base,
                    "exponent": report.exponent,
                    "result": report.result,
                    "expression": report.expression(precision),
                });
                self.write_json(&output)?;
            }
            OutputFormat::Table => {
                let table = Table::new(vec![PowerTableRow::new(report, precision)]);
                writeln!(self.out, "{}", table)?;
            }
            OutputFormat::Csv => {
                writeln!(self.out, "base,exponent,result")?;
                writeln!(
                    self.out,
                    "{},{},{}",
                    format_fixed(report.base, precision),
                    format_fixed(report.exponent, precision),
                    format_fixed(report.result, precision)
                )?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn write_conjunction(&mut self, report: &ConjunctionReport) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                // No trailing newline.
                write!(self.out, "{}", report.result)?;
            }
            OutputFormat::Json => {
                let output = serde_json::to_value(report)?;
                self.write_json(&output)?;
            }
            OutputFormat::Table => {
                let table = Table::new(vec![ConjunctionTableRow::from(report)]);
                writeln!(self.out, "{}", table)?;
            }
            OutputFormat::Csv => {
                writeln!(self.out, "a,b,result")?;
                writeln!(self.out, "{},{},{}", report.a, report.b, report.result)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn write_diagnostic(&mut self, kind: &str, message: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "error": kind,
                    "message": message,
                });
                self.write_json(&output)?;
            }
            _ => {
                writeln!(self.out, "{}", message)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Table row for a power report
#[derive(Tabled)]
struct PowerTableRow {
    base: String,
    exponent: String,
    result: String,
}

impl PowerTableRow {
    fn new(report: &PowerReport, precision: usize) -> Self {
        Self {
            base: format_fixed(report.base, precision),
            exponent: format_fixed(report.exponent, precision),
            result: format_fixed(report.result, precision),
        }
    }
}

/// Table row for a conjunction report
#[derive(Tabled)]
struct ConjunctionTableRow {
    a: bool,
    b: bool,
    result: bool,
}

impl From<&ConjunctionReport> for ConjunctionTableRow {
    fn from(report: &ConjunctionReport) -> Self {
        Self {
            a: report.a,
            b: report.b,
            result: report.result,
        }
    }
}
