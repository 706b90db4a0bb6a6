//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use ecoroute_cli::CliError;

fn main() {
    match ecoroute_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("ecoroute: {err}");
            std::process::exit(1);
        }
    }
}
