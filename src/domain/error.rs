use std::num::ParseFloatError;
use thiserror::Error;

/// MiniCalc unified error type
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Expected {expected} positional arguments, found {found}")]
    MissingArguments { expected: usize, found: usize },

    #[error("Invalid number '{input}': {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Invalid boolean '{input}'")]
    InvalidBoolean { input: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Argument and parse errors are turned into a single stdout line instead
    /// of aborting the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingArguments { .. } | Self::InvalidNumber { .. } | Self::InvalidBoolean { .. }
        )
    }

    /// Machine-readable kind used in structured diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingArguments { .. } => "missing_arguments",
            Self::InvalidNumber { .. } => "invalid_number",
            Self::InvalidBoolean { .. } => "invalid_boolean",
            Self::Config { .. } => "config",
            Self::Logging(_) => "logging",
            Self::Output(_) => "output",
            Self::Io(_) => "io",
        }
    }

    /// Process exit code for this error.
    ///
    /// Recoverable errors exit with 0 unless `strict` is set.
    pub fn exit_code(&self, strict: bool) -> i32 {
        match self {
            Self::MissingArguments { .. } if strict => 2,
            Self::InvalidNumber { .. } | Self::InvalidBoolean { .. } if strict => 1,
            Self::MissingArguments { .. } | Self::InvalidNumber { .. } | Self::InvalidBoolean { .. } => 0,
            Self::Config { .. } => 3,
            Self::Logging(_) | Self::Output(_) | Self::Io(_) => 1,
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
