// Logging module - Logging infrastructure
use crate::domain::error::{CalcError, CalcResult};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the event filter.
///
/// `RUST_LOG` wins when set; otherwise `verbose` forces debug and the
/// configured level applies to this crate only.
pub fn build_filter(log_level: &str, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(log_level, verbose)))
}

fn default_directive(log_level: &str, verbose: bool) -> String {
    let level = if verbose {
        "debug"
    } else {
        match log_level {
            "error" | "warn" | "info" | "debug" | "trace" | "off" => log_level,
            _ => "warn",
        }
    };
    format!("minicalc={}", level)
}

/// Initialize logging system.
///
/// Events go to stderr so stdout carries only results and diagnostics.
pub fn init_logging(log_level: &str, verbose: bool) -> CalcResult<()> {
    tracing_subscriber::registry()
        .with(build_filter(log_level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
        .map_err(|e| CalcError::Logging(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!("MiniCalc logging system initialized");
    Ok(())
}
