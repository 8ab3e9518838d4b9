//! Settings shared by the commands that resolve and score a sample.

use camino::Utf8PathBuf;
use luminight_core::{
    LightCatalog, NightMode, Position, ReductionRate, SkySnapshot, YearRange,
};

use crate::{ARG_CATALOG, ARG_LATITUDE, ARG_LONGITUDE, CliError, fs};

/// Optional inputs common to `assess`, `markers` and `insights`, as merged
/// from every configuration layer.
#[derive(Debug, Default)]
pub(crate) struct SkyInputs {
    pub(crate) catalog: Option<Utf8PathBuf>,
    pub(crate) latitude: Option<f64>,
    pub(crate) longitude: Option<f64>,
    pub(crate) accuracy: Option<f64>,
    pub(crate) year: Option<i32>,
    pub(crate) mode: Option<NightMode>,
    pub(crate) reduction_rate: Option<f64>,
}

/// Validated inputs for resolving and scoring a sample.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SkyQuery {
    /// Path to the JSON sample catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Observer position; `None` yields no metrics.
    pub(crate) position: Option<Position>,
    /// Selected year.
    pub(crate) year: i32,
    /// Current or restored night.
    pub(crate) mode: NightMode,
    /// Restoration reduction rate.
    pub(crate) rate: ReductionRate,
}

impl SkyQuery {
    /// Validate merged inputs; `catalog_env` names the variable to suggest
    /// when the catalog path is missing.
    pub(crate) fn from_inputs(
        inputs: SkyInputs,
        catalog_env: &'static str,
    ) -> Result<Self, CliError> {
        let catalog = inputs.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: catalog_env,
        })?;
        let position = match (inputs.latitude, inputs.longitude) {
            (Some(latitude), Some(longitude)) => {
                let position = Position::new(latitude, longitude);
                Some(match inputs.accuracy {
                    Some(accuracy) => position.with_accuracy(accuracy),
                    None => position,
                })
            }
            (None, None) => None,
            (Some(_), None) => {
                return Err(CliError::IncompletePosition {
                    given: ARG_LATITUDE,
                    missing: ARG_LONGITUDE,
                });
            }
            (None, Some(_)) => {
                return Err(CliError::IncompletePosition {
                    given: ARG_LONGITUDE,
                    missing: ARG_LATITUDE,
                });
            }
        };
        let range = YearRange::default();
        let year = inputs.year.unwrap_or_else(|| range.default_year());
        if !range.contains(year) {
            return Err(CliError::YearOutOfRange {
                year,
                min: range.min(),
                max: range.max(),
            });
        }
        let rate = inputs
            .reduction_rate
            .map(ReductionRate::new)
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            catalog,
            position,
            year,
            mode: inputs.mode.unwrap_or_default(),
            rate,
        })
    }

    /// Check the catalog path and load it.
    pub(crate) fn load_catalog(&self) -> Result<LightCatalog, CliError> {
        fs::require_existing(&self.catalog, ARG_CATALOG)?;
        fs::load_catalog(&self.catalog)
    }

    /// Resolve and score the nearest sample in `catalog`.
    pub(crate) fn assess(&self, catalog: &LightCatalog) -> Option<SkySnapshot> {
        SkySnapshot::assess(
            catalog.samples(),
            self.position.as_ref(),
            self.year,
            self.mode,
            self.rate,
        )
    }
}
