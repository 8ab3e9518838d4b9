//! Error types emitted by the LumiNight CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use luminight_core::{CatalogError, ReductionRateError};
use luminight_insights::{GeneratorBuildError, InsightError};
use thiserror::Error;

/// Errors emitted by the LumiNight CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Only one half of a coordinate pair was supplied.
    #[error("--{given} requires --{missing}")]
    IncompletePosition {
        given: &'static str,
        missing: &'static str,
    },
    /// The selected year lies outside the timeline.
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    /// The reduction rate failed validation.
    #[error("invalid reduction rate: {0}")]
    ReductionRate(#[from] ReductionRateError),
    /// The report query was empty after trimming.
    #[error("report query must not be blank")]
    BlankQuery,
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the catalog file failed.
    #[error("failed to open catalog at {path:?}: {source}")]
    OpenCatalog {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog file was not a JSON array of samples.
    #[error("failed to parse catalog at {path:?}: {source}")]
    ParseCatalog {
        path: Utf8PathBuf,
        #[source]
        source: CatalogError,
    },
    /// Insights were requested but no sample could be resolved.
    #[error("no light sample is available for the requested position and year")]
    NoSkyData,
    /// Constructing the insight generator failed.
    #[error("failed to build insight generator: {0}")]
    BuildGenerator(#[from] GeneratorBuildError),
    /// Building the async runtime for the insight request failed.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The insight generator reported a failure.
    #[error(transparent)]
    Insights(#[from] InsightError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
