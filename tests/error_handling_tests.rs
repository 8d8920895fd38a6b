use minicalc::cli::commands::run_power;
use minicalc::cli::output::OutputError;
use minicalc::cli::{OutputWriter, PowerArgs, Settings};
use minicalc::core::boolean::ConjunctionReport;
use minicalc::core::power::PowerReport;
use minicalc::{CalcError, CalcResult};
use std::error::Error;
use std::io;

/// A writer whose sink is gone, like stdout closed by a pipe.
struct BrokenWriter;

impl OutputWriter for BrokenWriter {
    fn write_power(&mut self, _report: &PowerReport, _precision: usize) -> Result<(), OutputError> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into())
    }

    fn write_conjunction(&mut self, _report: &ConjunctionReport) -> Result<(), OutputError> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into())
    }

    fn write_diagnostic(&mut self, _kind: &str, _message: &str) -> Result<(), OutputError> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into())
    }
}

/// Error handling and resilience tests
#[cfg(test)]
mod error_handling_tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_error_types() {
        let errors = vec![
            CalcError::MissingArguments { expected: 2, found: 1 },
            CalcError::InvalidBoolean { input: "yes".to_string() },
            CalcError::Config { message: "Config error".to_string() },
            CalcError::Logging("Logging error".to_string()),
            CalcError::Output("Output error".to_string()),
        ];

        for error in errors {
            let display = error.to_string();
            assert!(!display.is_empty(), "Error display should not be empty");
            assert!(!error.kind().is_empty());

            fn assert_send_sync<T: Send + Sync>() {}
            assert_send_sync::<CalcError>();
        }
    }

    #[test]
    fn test_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let calc_error: CalcError = io_error.into();
        assert!(matches!(calc_error, CalcError::Io(_)));
        assert_eq!(calc_error.exit_code(true), 1);
    }

    #[test]
    fn test_result_type() {
        fn success_function() -> CalcResult<f64> {
            Ok(1.0)
        }

        fn error_function() -> CalcResult<f64> {
            Err(CalcError::Config {
                message: "Test error".to_string(),
            })
        }

        assert_eq!(success_function().unwrap(), 1.0);
        assert!(error_function().unwrap_err().to_string().contains("Configuration"));
    }

    #[test]
    fn test_error_chain() {
        let source = "1..2".parse::<f64>().unwrap_err();
        let error = CalcError::InvalidNumber {
            input: "1..2".to_string(),
            source,
        };

        let mut current_error: &dyn Error = &error;
        let mut depth = 0;
        while let Some(source) = current_error.source() {
            current_error = source;
            depth += 1;
        }
        assert_eq!(depth, 1);
    }

    #[test]
    fn test_write_failures_are_not_recovered() {
        let args = PowerArgs::try_parse_from(["power-cli", "2", "2"]).unwrap();
        let err = run_power(&args, "power-cli", &Settings::default(), &mut BrokenWriter).unwrap_err();

        assert!(matches!(err, CalcError::Output(_)));
        assert!(!err.is_recoverable());
        assert_eq!(err.exit_code(false), 1);
    }

    #[test]
    fn test_diagnostic_write_failures_are_not_recovered() {
        let args = PowerArgs::try_parse_from(["power-cli", "abc", "2"]).unwrap();
        let err = run_power(&args, "power-cli", &Settings::default(), &mut BrokenWriter).unwrap_err();
        assert!(matches!(err, CalcError::Output(_)));
    }
}
