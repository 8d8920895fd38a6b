// bool-and-cli - Logical AND of two booleans
use clap::Parser;
use minicalc::cli::execute_bool_and;
use minicalc::cli::BoolAndArgs;

fn main() {
    let args = BoolAndArgs::parse();

    match execute_bool_and(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code(false));
        }
    }
}
