// CLI module - Command line interface
pub mod args;
pub mod commands;
pub mod output;

pub use args::{BoolAndArgs, CommonArgs, OutputFormat, PowerArgs};
pub use commands::{execute_bool_and, execute_power, Settings};
pub use output::{ConsoleWriter, OutputWriter};
