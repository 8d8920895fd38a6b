// power-cli - Raise a base to an exponent
use clap::Parser;
use minicalc::cli::commands::{execute_power, program_name};
use minicalc::cli::PowerArgs;

fn main() {
    let args = PowerArgs::parse();
    let program = program_name("power-cli");

    match execute_power(args, &program) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code(false));
        }
    }
}
