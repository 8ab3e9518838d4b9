//! `assess` command: score the sky at a position.

use camino::Utf8PathBuf;
use clap::Parser;
use luminight_core::{NightMode, SkySnapshot};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::sky::{SkyInputs, SkyQuery};
use crate::{
    ARG_ACCURACY, ARG_CATALOG, ARG_LATITUDE, ARG_LONGITUDE, ARG_MODE, ARG_REDUCTION_RATE,
    ARG_YEAR, CliError, ENV_ASSESS_CATALOG, write_json,
};

/// CLI arguments for the `assess` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "assess",
    long_about = "Resolve the catalogued sample nearest to a position, \
                 restricted to samples recorded on or before the selected \
                 year, and print its sky metrics as JSON. Prints null when \
                 no position is given or no sample is eligible.",
    about = "Score the night sky at a position"
)]
#[ortho_config(prefix = "LUMINIGHT")]
pub(crate) struct AssessArgs {
    /// Path to a JSON array of light samples.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Observer latitude in degrees.
    #[arg(long = ARG_LATITUDE, value_name = "deg", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Observer longitude in degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "deg", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Horizontal accuracy of the position in metres.
    #[arg(long = ARG_ACCURACY, value_name = "m")]
    #[serde(default)]
    pub(crate) accuracy: Option<f64>,
    /// Selected year (defaults to the latest year on the timeline).
    #[arg(long = ARG_YEAR, value_name = "year")]
    #[serde(default)]
    pub(crate) year: Option<i32>,
    /// Night mode: `current` or `restored`.
    #[arg(long = ARG_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<NightMode>,
    /// Fraction of light removed in restored mode (default 0.4).
    #[arg(long = ARG_REDUCTION_RATE, value_name = "fraction")]
    #[serde(default)]
    pub(crate) reduction_rate: Option<f64>,
}

impl AssessArgs {
    pub(crate) fn into_config(self) -> Result<SkyQuery, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SkyQuery::try_from(merged)
    }
}

impl TryFrom<AssessArgs> for SkyQuery {
    type Error = CliError;

    fn try_from(args: AssessArgs) -> Result<Self, Self::Error> {
        let inputs = SkyInputs {
            catalog: args.catalog,
            latitude: args.latitude,
            longitude: args.longitude,
            accuracy: args.accuracy,
            year: args.year,
            mode: args.mode,
            reduction_rate: args.reduction_rate,
        };
        Self::from_inputs(inputs, ENV_ASSESS_CATALOG)
    }
}

pub(crate) fn run_assess_with(args: AssessArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let snapshot = execute_assess(args.into_config()?)?;
    write_json(writer, &snapshot)
}

pub(crate) fn execute_assess(query: SkyQuery) -> Result<Option<SkySnapshot>, CliError> {
    let catalog = query.load_catalog()?;
    let snapshot = query.assess(&catalog);
    if snapshot.is_none() {
        log::debug!("no eligible sample for year {}", query.year);
    }
    Ok(snapshot)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SkyQuery, CliError> {
    let merged = AssessArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SkyQuery::try_from(merged)
}
