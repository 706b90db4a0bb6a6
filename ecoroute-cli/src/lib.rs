//! Command-line interface for EcoRoute collection planning.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod logging;
mod plan;

pub use error::CliError;

use plan::PlanArgs;

const ARG_PLAN_REQUEST: &str = "request";
const ARG_AVERAGE_SPEED: &str = "average-speed-kmh";
const ARG_LOOKUP: &str = "lookup";
const ARG_MAX_POINTS: &str = "max-points";
const ARG_FORMAT: &str = "format";
const ARG_LOG_LEVEL: &str = "log-level";
const ENV_PLAN_REQUEST: &str = "ECOROUTE_CMDS_PLAN_REQUEST_PATH";

/// Run the EcoRoute CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, configuration, planning or
/// output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "ecoroute",
    about = "Plan waste-collection rounds over depots and bins",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order bins into a collection tour and describe each leg.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
