//! Command-line interface for the LumiNight engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;

mod assess;
mod error;
mod fs;
mod insights;
mod markers;
mod report;
mod sky;

pub use error::CliError;

use assess::AssessArgs;
use insights::InsightsArgs;
use markers::MarkersArgs;
use report::ReportArgs;

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_LATITUDE: &str = "latitude";
pub(crate) const ARG_LONGITUDE: &str = "longitude";
pub(crate) const ARG_ACCURACY: &str = "accuracy";
pub(crate) const ARG_YEAR: &str = "year";
pub(crate) const ARG_MODE: &str = "mode";
pub(crate) const ARG_REDUCTION_RATE: &str = "reduction-rate";
pub(crate) const ARG_QUERY: &str = "query";
pub(crate) const ARG_API_KEY: &str = "api-key";
pub(crate) const ARG_MODEL: &str = "model";
pub(crate) const ARG_BASE_URL: &str = "base-url";
pub(crate) const ARG_TIMEOUT_SECS: &str = "timeout-secs";

pub(crate) const ENV_ASSESS_CATALOG: &str = "LUMINIGHT_CMDS_ASSESS_CATALOG";
pub(crate) const ENV_MARKERS_CATALOG: &str = "LUMINIGHT_CMDS_MARKERS_CATALOG";
pub(crate) const ENV_INSIGHTS_CATALOG: &str = "LUMINIGHT_CMDS_INSIGHTS_CATALOG";
pub(crate) const ENV_INSIGHTS_API_KEY: &str = "LUMINIGHT_CMDS_INSIGHTS_API_KEY";
pub(crate) const ENV_REPORT_QUERY: &str = "LUMINIGHT_CMDS_REPORT_QUERY";

/// Run the LumiNight CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or the selected command
/// fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Assess(args) => assess::run_assess_with(args, &mut stdout),
        Command::Markers(args) => markers::run_markers_with(args, &mut stdout),
        Command::Report(args) => report::run_report_with(args, &mut stdout),
        Command::Insights(args) => insights::run_insights(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "luminight",
    about = "Resolve light-pollution samples and score the night sky",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score the sky at a position for a selected year.
    Assess(AssessArgs),
    /// Derive map marker styles for every catalogued sample.
    Markers(MarkersArgs),
    /// Produce a synthetic sky report for a free-text location query.
    Report(ReportArgs),
    /// Ask a text-generation model for stargazing insights.
    Insights(InsightsArgs),
}

/// Write `value` to `writer` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
