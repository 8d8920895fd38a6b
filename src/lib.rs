//! MiniCalc Library
//!
//! Shared pieces of the `power-cli` and `bool-and-cli` programs: argument
//! definitions, the two operations, output rendering, configuration and
//! logging setup.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use domain::error::{CalcError, CalcResult};
pub use domain::config::CalcConfig;
pub use crate::core::boolean::ConjunctionReport;
pub use crate::core::power::PowerReport;
