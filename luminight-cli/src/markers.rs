//! `markers` command: style every catalogued sample for the map.

use camino::Utf8PathBuf;
use clap::Parser;
use luminight_core::{MarkerStyle, NightMode};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::sky::{SkyInputs, SkyQuery};
use crate::{
    ARG_CATALOG, ARG_MODE, ARG_REDUCTION_RATE, ARG_YEAR, CliError, ENV_MARKERS_CATALOG,
    write_json,
};

/// CLI arguments for the `markers` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "markers",
    long_about = "Print one marker style per catalogued sample as a JSON \
                 array. Samples recorded after the selected year stay in the \
                 output with zero opacity.",
    about = "Derive map marker styles"
)]
#[ortho_config(prefix = "LUMINIGHT")]
pub(crate) struct MarkersArgs {
    /// Path to a JSON array of light samples.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
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

impl MarkersArgs {
    pub(crate) fn into_config(self) -> Result<SkyQuery, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SkyQuery::try_from(merged)
    }
}

impl TryFrom<MarkersArgs> for SkyQuery {
    type Error = CliError;

    fn try_from(args: MarkersArgs) -> Result<Self, Self::Error> {
        let inputs = SkyInputs {
            catalog: args.catalog,
            year: args.year,
            mode: args.mode,
            reduction_rate: args.reduction_rate,
            ..SkyInputs::default()
        };
        Self::from_inputs(inputs, ENV_MARKERS_CATALOG)
    }
}

pub(crate) fn run_markers_with(args: MarkersArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let markers = execute_markers(&args.into_config()?)?;
    write_json(writer, &markers)
}

pub(crate) fn execute_markers(query: &SkyQuery) -> Result<Vec<MarkerStyle>, CliError> {
    let catalog = query.load_catalog()?;
    let markers = catalog.markers(query.year, query.mode, query.rate);
    log::debug!(
        "styled {} markers for {} in {} mode",
        markers.len(),
        query.year,
        query.mode
    );
    Ok(markers)
}
