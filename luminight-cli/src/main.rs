//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use luminight_cli::CliError;

fn main() {
    match luminight_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("luminight: {err}");
            std::process::exit(1);
        }
    }
}
