use clap::{Args as ClapArgs, Parser, ValueEnum};
use crate::core::power::MAX_PRECISION;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::PathBuf;

/// Command line arguments for `power-cli`
#[derive(Parser, Debug)]
#[command(
    name = "power-cli",
    version = env!("CARGO_PKG_VERSION"),
    about = "Raise a base to an exponent",
    long_about = "Computes <base>^<exponent> using real-valued exponentiation and prints both operands and the result with fixed-point formatting."
)]
pub struct PowerArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Fractional digits in printed numbers
    #[arg(
        short,
        long,
        value_name = "DIGITS",
        value_parser = clap::value_parser!(u8).range(0..=MAX_PRECISION as i64)
    )]
    pub precision: Option<u8>,

    /// Base and exponent, decimal reals such as 2, -1.5 or 3e2; extra operands are ignored
    #[arg(
        value_name = "OPERAND",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub operands: Vec<OsString>,
}

impl PowerArgs {
    pub fn base(&self) -> Option<Cow<'_, str>> {
        operand(&self.operands, 0)
    }

    pub fn exponent(&self) -> Option<Cow<'_, str>> {
        operand(&self.operands, 1)
    }
}

/// Command line arguments for `bool-and-cli`
#[derive(Parser, Debug)]
#[command(
    name = "bool-and-cli",
    version = env!("CARGO_PKG_VERSION"),
    about = "Logical AND of two booleans",
    long_about = "Parses two booleans (1, t, T, TRUE, true, True or 0, f, F, FALSE, false, False) and prints their conjunction."
)]
pub struct BoolAndArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Left and right operands; extra operands are ignored
    #[arg(
        value_name = "OPERAND",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub operands: Vec<OsString>,
}

impl BoolAndArgs {
    pub fn a(&self) -> Option<Cow<'_, str>> {
        operand(&self.operands, 0)
    }

    pub fn b(&self) -> Option<Cow<'_, str>> {
        operand(&self.operands, 1)
    }
}

/// Operand `index` as text. Bytes that are not UTF-8 are replaced, so such
/// operands reach the parsers and fail there like any other bad token.
fn operand(operands: &[OsString], index: usize) -> Option<Cow<'_, str>> {
    operands.get(index).map(|raw| raw.to_string_lossy())
}

/// Options shared by both programs
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format [default: from config, else text]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Exit with a non-zero status on usage and parse errors
    #[arg(long)]
    pub strict: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
    /// Table output
    Table,
    /// CSV output
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
