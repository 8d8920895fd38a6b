//! Real-valued exponentiation behind `power-cli`.
//!
//! Inputs are decimal reals parsed into `f64`; the result comes straight from
//! `f64::powf`, so NaN and infinities are reported as values, never as errors.

use crate::domain::error::{CalcError, CalcResult};
use serde::Serialize;
use tracing::debug;

/// Fractional digits printed when no precision is configured
pub const DEFAULT_PRECISION: usize = 6;

/// Largest accepted precision, from flags and config files alike
pub const MAX_PRECISION: usize = 64;

/// Diagnostic printed when either operand fails to parse
pub const INVALID_NUMBERS_MESSAGE: &str =
    "Error: Please provide valid numbers for base and exponent.";

/// Outcome of one exponentiation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerReport {
    pub base: f64,
    pub exponent: f64,
    pub result: f64,
}

impl PowerReport {
    /// Render as `<base>^<exponent> = <result>` with fixed-point operands
    pub fn expression(&self, precision: usize) -> String {
        format!(
            "{}^{} = {}",
            format_fixed(self.base, precision),
            format_fixed(self.exponent, precision),
            format_fixed(self.result, precision)
        )
    }
}

/// Usage line shown when fewer than two operands are given
pub fn usage_line(program: &str) -> String {
    format!("Usage: {} <base> <exponent>", program)
}

/// Parse a signed decimal real such as `-2`, `2.5`, `1e-3` or `inf`.
///
/// Surrounding whitespace is not trimmed.
pub fn parse_real(input: &str) -> CalcResult<f64> {
    input.parse::<f64>().map_err(|source| CalcError::InvalidNumber {
        input: input.to_string(),
        source,
    })
}

/// `base` raised to `exponent`
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Parse both operands and compute the power
pub fn evaluate(base: &str, exponent: &str) -> CalcResult<PowerReport> {
    let base = parse_real(base)?;
    let exponent = parse_real(exponent)?;
    let result = power(base, exponent);

    debug!(base, exponent, result, "computed power");

    Ok(PowerReport {
        base,
        exponent,
        result,
    })
}

/// Fixed-point rendering with `precision` fractional digits and no exponent
/// notation. Precision is capped at [`MAX_PRECISION`].
pub fn format_fixed(value: f64, precision: usize) -> String {
    format!("{:.*}", precision.min(MAX_PRECISION), value)
}
