use crate::cli::args::{BoolAndArgs, CommonArgs, OutputFormat, PowerArgs};
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::core::{boolean, power};
use crate::domain::config::CalcConfig;
use crate::domain::error::{CalcError, CalcResult};
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging::init_logging;
use tracing::{debug, info};

/// Effective settings for one run, after config files and flags are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output: OutputFormat,
    pub precision: usize,
    pub strict_exit_codes: bool,
}

impl Settings {
    /// Flags win over configuration.
    pub fn resolve(config: &CalcConfig, common: &CommonArgs, precision: Option<usize>) -> Self {
        Self {
            output: common.output.unwrap_or(config.global.output),
            precision: precision.unwrap_or(config.global.precision),
            strict_exit_codes: common.strict || config.global.strict_exit_codes,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(&CalcConfig::default(), &CommonArgs::default(), None)
    }
}

/// Name the program was invoked as, for the usage line
pub fn program_name(fallback: &str) -> String {
    std::env::args_os()
        .next()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| fallback.to_string())
}

/// Execute `power-cli` and return the process exit code
pub fn execute_power(args: PowerArgs, program: &str) -> CalcResult<i32> {
    let config = prepare(&args.common)?;
    let settings = Settings::resolve(&config, &args.common, args.precision.map(usize::from));
    let mut writer = ConsoleWriter::stdout(settings.output);

    run_power(&args, program, &settings, &mut writer)
}

/// Execute `bool-and-cli` and return the process exit code
pub fn execute_bool_and(args: BoolAndArgs) -> CalcResult<i32> {
    let config = prepare(&args.common)?;
    let settings = Settings::resolve(&config, &args.common, None);
    let mut writer = ConsoleWriter::stdout(settings.output);

    run_bool_and(&args, &settings, &mut writer)
}

/// Compute and print one power.
///
/// Argument and parse errors are written as a single diagnostic line and
/// mapped to an exit code; anything else is returned.
pub fn run_power(
    args: &PowerArgs,
    program: &str,
    settings: &Settings,
    writer: &mut dyn OutputWriter,
) -> CalcResult<i32> {
    let outcome = match (args.base().as_deref(), args.exponent().as_deref()) {
        (Some(base), Some(exponent)) => power::evaluate(base, exponent),
        (base, _) => Err(CalcError::MissingArguments {
            expected: 2,
            found: usize::from(base.is_some()),
        }),
    };

    match outcome {
        Ok(report) => {
            writer.write_power(&report, settings.precision)?;
            Ok(0)
        }
        Err(err) if err.is_recoverable() => {
            info!(error = %err, "invalid power-cli invocation");
            let (kind, message) = match &err {
                CalcError::MissingArguments { .. } => ("usage", power::usage_line(program)),
                _ => (err.kind(), power::INVALID_NUMBERS_MESSAGE.to_string()),
            };
            writer.write_diagnostic(kind, &message)?;
            Ok(err.exit_code(settings.strict_exit_codes))
        }
        Err(err) => Err(err),
    }
}

/// Compute and print one conjunction.
///
/// The left operand is parsed before the right one is looked for, so a bad
/// first token is reported as a parse error even when the second is missing.
pub fn run_bool_and(
    args: &BoolAndArgs,
    settings: &Settings,
    writer: &mut dyn OutputWriter,
) -> CalcResult<i32> {
    let outcome = match (args.a().as_deref(), args.b().as_deref()) {
        (Some(a), Some(b)) => boolean::evaluate(a, b),
        (Some(a), None) => boolean::parse_bool(a).and_then(|_| {
            Err(CalcError::MissingArguments {
                expected: 2,
                found: 1,
            })
        }),
        (None, _) => Err(CalcError::MissingArguments {
            expected: 2,
            found: 0,
        }),
    };

    match outcome {
        Ok(report) => {
            writer.write_conjunction(&report)?;
            Ok(0)
        }
        Err(err) if err.is_recoverable() => {
            info!(error = %err, "invalid bool-and-cli invocation");
            writer.write_diagnostic(err.kind(), boolean::INVALID_INPUT_MESSAGE)?;
            Ok(err.exit_code(settings.strict_exit_codes))
        }
        Err(err) => Err(err),
    }
}

/// Load configuration and install logging
fn prepare(common: &CommonArgs) -> CalcResult<CalcConfig> {
    let config_manager = ConfigManager::new();
    let (config, loaded) = match &common.config {
        Some(path) => (config_manager.load_config_from_path(path)?, vec![path.as_path()]),
        None => (config_manager.load_config()?, config_manager.config_files()),
    };

    if !common.quiet {
        init_logging(&config.global.log_level, common.verbose)?;
    }

    // Files are read before the subscriber exists, so report them now.
    for path in loaded {
        debug!(path = %path.display(), "loaded config file");
    }

    Ok(config)
}
