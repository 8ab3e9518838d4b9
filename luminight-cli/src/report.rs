//! `report` command: synthetic sky report for a free-text location.

use clap::Parser;
use luminight_core::SyntheticReport;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{ARG_QUERY, CliError, ENV_REPORT_QUERY, write_json};

/// CLI arguments for the `report` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "report",
    long_about = "Print a deterministic, illustrative sky report for a \
                 location name. The figures are derived from the text alone \
                 and carry no geographic meaning.",
    about = "Generate a synthetic sky report"
)]
#[ortho_config(prefix = "LUMINIGHT")]
pub(crate) struct ReportArgs {
    /// Location text to report on.
    #[arg(long = ARG_QUERY, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
}

impl ReportArgs {
    pub(crate) fn into_report(self) -> Result<SyntheticReport, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SyntheticReport::try_from(merged)
    }
}

impl TryFrom<ReportArgs> for SyntheticReport {
    type Error = CliError;

    fn try_from(args: ReportArgs) -> Result<Self, Self::Error> {
        let query = args.query.ok_or(CliError::MissingArgument {
            field: ARG_QUERY,
            env: ENV_REPORT_QUERY,
        })?;
        Self::from_query(&query).ok_or(CliError::BlankQuery)
    }
}

pub(crate) fn run_report_with(args: ReportArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let report = args.into_report()?;
    write_json(writer, &report)
}

#[cfg(test)]
pub(crate) fn report_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SyntheticReport, CliError> {
    let merged = ReportArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SyntheticReport::try_from(merged)
}
