//! Boolean conjunction behind `bool-and-cli`.

use crate::domain::error::{CalcError, CalcResult};
use serde::Serialize;
use tracing::debug;

/// Diagnostic printed when an operand is missing or not a recognized boolean
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter valid values.";

/// Outcome of one conjunction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConjunctionReport {
    pub a: bool,
    pub b: bool,
    pub result: bool,
}

/// Parse one of `1 t T TRUE true True` or `0 f F FALSE false False`.
///
/// Mixed-case spellings like `tRUE` and words like `yes` are rejected.
pub fn parse_bool(token: &str) -> CalcResult<bool> {
    match token {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(CalcError::InvalidBoolean {
            input: token.to_string(),
        }),
    }
}

pub fn conjunction(a: bool, b: bool) -> bool {
    a && b
}

/// Parse both operands, left first, and combine them
pub fn evaluate(a: &str, b: &str) -> CalcResult<ConjunctionReport> {
    let a = parse_bool(a)?;
    let b = parse_bool(b)?;
    let result = conjunction(a, b);

    debug!(a, b, result, "computed conjunction");

    Ok(ConjunctionReport { a, b, result })
}
