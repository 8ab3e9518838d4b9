//! `insights` command: narrative stargazing insights from a text model.

use std::fmt;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use luminight_core::NightMode;
use luminight_insights::{
    GeminiConfig, GeminiInsightGenerator, InsightError, InsightGenerator, InsightRequest,
    InsightSession, InsightState, SkyInsights,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::sky::{SkyInputs, SkyQuery};
use crate::{
    ARG_ACCURACY, ARG_API_KEY, ARG_BASE_URL, ARG_CATALOG, ARG_LATITUDE, ARG_LONGITUDE, ARG_MODE,
    ARG_MODEL, ARG_REDUCTION_RATE, ARG_TIMEOUT_SECS, ARG_YEAR, CliError, ENV_INSIGHTS_API_KEY,
    ENV_INSIGHTS_CATALOG, write_json,
};

/// CLI arguments for the `insights` subcommand.
///
/// `Debug` output redacts the API key.
#[derive(Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "insights",
    long_about = "Resolve and score the nearest sample, then ask the Gemini \
                 API for stargazing advice, an environmental impact summary \
                 and lighting suggestions. In restored mode the request uses \
                 the restored intensity and class.",
    about = "Generate stargazing insights"
)]
#[ortho_config(prefix = "LUMINIGHT")]
pub(crate) struct InsightsArgs {
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
    /// Gemini API key.
    #[arg(long = ARG_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    /// Gemini model name.
    #[arg(long = ARG_MODEL, value_name = "name")]
    #[serde(default)]
    pub(crate) model: Option<String>,
    /// API origin, for proxies and tests.
    #[arg(long = ARG_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl fmt::Debug for InsightsArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsightsArgs")
            .field("catalog", &self.catalog)
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .field("accuracy", &self.accuracy)
            .field("year", &self.year)
            .field("mode", &self.mode)
            .field("reduction_rate", &self.reduction_rate)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl InsightsArgs {
    pub(crate) fn into_config(self) -> Result<InsightsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        InsightsConfig::try_from(merged)
    }
}

/// Validated settings for the `insights` command.
#[derive(Debug, Clone)]
pub(crate) struct InsightsConfig {
    pub(crate) query: SkyQuery,
    pub(crate) gemini: GeminiConfig,
}

impl TryFrom<InsightsArgs> for InsightsConfig {
    type Error = CliError;

    fn try_from(args: InsightsArgs) -> Result<Self, Self::Error> {
        let api_key = args.api_key.ok_or(CliError::MissingArgument {
            field: ARG_API_KEY,
            env: ENV_INSIGHTS_API_KEY,
        })?;
        let mut gemini = GeminiConfig::new(api_key);
        if let Some(model) = args.model {
            gemini = gemini.with_model(model);
        }
        if let Some(base_url) = args.base_url {
            gemini = gemini.with_base_url(base_url);
        }
        if let Some(secs) = args.timeout_secs {
            gemini = gemini.with_timeout(Duration::from_secs(secs));
        }
        let inputs = SkyInputs {
            catalog: args.catalog,
            latitude: args.latitude,
            longitude: args.longitude,
            accuracy: args.accuracy,
            year: args.year,
            mode: args.mode,
            reduction_rate: args.reduction_rate,
        };
        let query = SkyQuery::from_inputs(inputs, ENV_INSIGHTS_CATALOG)?;
        Ok(Self { query, gemini })
    }
}

/// Builds the generator used by the `insights` command.
pub(crate) trait InsightGeneratorBuilder {
    fn build(&self, config: &GeminiConfig) -> Result<Arc<dyn InsightGenerator>, CliError>;
}

/// Builds a [`GeminiInsightGenerator`].
#[derive(Debug, Default)]
pub(crate) struct DefaultInsightGeneratorBuilder;

impl InsightGeneratorBuilder for DefaultInsightGeneratorBuilder {
    fn build(&self, config: &GeminiConfig) -> Result<Arc<dyn InsightGenerator>, CliError> {
        let generator = GeminiInsightGenerator::with_config(config.clone())?;
        Ok(Arc::new(generator))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InsightsOutput<'a> {
    request: &'a InsightRequest,
    insights: &'a SkyInsights,
}

pub(crate) fn run_insights(args: InsightsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_insights_with(args, &DefaultInsightGeneratorBuilder, writer)
}

pub(crate) fn run_insights_with(
    args: InsightsArgs,
    builder: &dyn InsightGeneratorBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_insights(&config, builder, writer)
}

pub(crate) fn execute_insights(
    config: &InsightsConfig,
    builder: &dyn InsightGeneratorBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let catalog = config.query.load_catalog()?;
    let snapshot = config.query.assess(&catalog).ok_or(CliError::NoSkyData)?;
    let request = InsightRequest::from_snapshot(&snapshot);
    let generator = builder.build(&config.gemini)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let session = InsightSession::new(generator);
    log::info!(
        "requesting insights for {} (bortle {})",
        request.location_name,
        request.bortle_score
    );
    match runtime.block_on(session.request(request.clone())) {
        InsightState::Ready(insights) => write_json(
            writer,
            &InsightsOutput {
                request: &request,
                insights: &insights,
            },
        ),
        InsightState::Failed(err) => Err(CliError::Insights(err)),
        InsightState::Idle | InsightState::Loading { .. } => {
            Err(CliError::Insights(InsightError::Cancelled))
        }
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<InsightsConfig, CliError> {
    let merged = InsightsArgs::merge_from_layers(layers).map_err(CliError::from)?;
    InsightsConfig::try_from(merged)
}
