//! Focused unit tests covering configuration merging and command execution.

use super::helpers::{CatalogFile, write_utf8};
use super::*;
use crate::assess::execute_assess;
use crate::insights::{DefaultInsightGeneratorBuilder, InsightGeneratorBuilder, InsightsConfig};
use crate::markers::execute_markers;
use crate::sky::{SkyInputs, SkyQuery};
use luminight_core::{DEFAULT_MAX_YEAR, NightMode, ReductionRate, SyntheticReport};
use luminight_insights::{GeminiConfig, GeneratorBuildError};
use ortho_config::MergeComposer;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn catalog() -> CatalogFile {
    CatalogFile::new()
}

fn query_for(catalog: &CatalogFile) -> SkyQuery {
    SkyQuery::from_inputs(
        SkyInputs {
            catalog: Some(catalog.path().to_path_buf()),
            ..SkyInputs::default()
        },
        ENV_ASSESS_CATALOG,
    )
    .expect("catalog-only inputs are valid")
}

#[rstest]
fn converting_assess_without_catalog_errors() {
    let err = SkyQuery::try_from(AssessArgs::default()).expect_err("missing catalog should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_ASSESS_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn sky_query_applies_defaults(catalog: CatalogFile) {
    let query = query_for(&catalog);
    assert_eq!(query.year, DEFAULT_MAX_YEAR);
    assert_eq!(query.mode, NightMode::Current);
    assert_eq!(query.rate, ReductionRate::default());
    assert!(query.position.is_none());
}

#[rstest]
#[case(Some(37.8), None, ARG_LATITUDE, ARG_LONGITUDE)]
#[case(None, Some(-122.4), ARG_LONGITUDE, ARG_LATITUDE)]
fn half_a_position_is_rejected(
    catalog: CatalogFile,
    #[case] latitude: Option<f64>,
    #[case] longitude: Option<f64>,
    #[case] expected_given: &str,
    #[case] expected_missing: &str,
) {
    let inputs = SkyInputs {
        catalog: Some(catalog.path().to_path_buf()),
        latitude,
        longitude,
        ..SkyInputs::default()
    };
    match SkyQuery::from_inputs(inputs, ENV_ASSESS_CATALOG) {
        Err(CliError::IncompletePosition { given, missing }) => {
            assert_eq!(given, expected_given);
            assert_eq!(missing, expected_missing);
        }
        other => panic!("expected IncompletePosition, found {other:?}"),
    }
}

#[rstest]
#[case(1989)]
#[case(2026)]
fn years_outside_the_timeline_are_rejected(catalog: CatalogFile, #[case] year: i32) {
    let inputs = SkyInputs {
        catalog: Some(catalog.path().to_path_buf()),
        year: Some(year),
        ..SkyInputs::default()
    };
    match SkyQuery::from_inputs(inputs, ENV_ASSESS_CATALOG) {
        Err(CliError::YearOutOfRange { year: rejected, .. }) => assert_eq!(rejected, year),
        other => panic!("expected YearOutOfRange, found {other:?}"),
    }
}

#[rstest]
fn invalid_reduction_rates_are_rejected(catalog: CatalogFile) {
    let inputs = SkyInputs {
        catalog: Some(catalog.path().to_path_buf()),
        reduction_rate: Some(1.5),
        ..SkyInputs::default()
    };
    let err = SkyQuery::from_inputs(inputs, ENV_ASSESS_CATALOG).expect_err("rate above one");
    assert!(matches!(err, CliError::ReductionRate(_)));
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "catalog": 42 }));

    let err = crate::assess::config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence(catalog: CatalogFile) {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": catalog.root().join("from-file.json").as_str(),
            "year": 2000,
            "mode": "restored",
        }),
        None,
    );
    composer.push_environment(json!({
        "catalog": catalog.path().as_str(),
        "year": 2010,
    }));
    composer.push_cli(json!({
        "latitude": 37.8,
        "longitude": -122.4,
    }));

    let query = crate::assess::config_from_layers_for_test(composer.layers())
        .expect("merged config should build");
    assert_eq!(query.catalog.as_path(), catalog.path());
    assert_eq!(query.year, 2010);
    assert_eq!(query.mode, NightMode::Restored);
    let position = query.position.expect("position from CLI layer");
    assert_eq!(position.latitude, 37.8);
    assert_eq!(position.longitude, -122.4);
}

#[rstest]
fn assess_resolves_the_nearest_sample(catalog: CatalogFile) {
    let query = SkyQuery {
        position: Some(luminight_core::Position::new(37.7, -122.3)),
        ..query_for(&catalog)
    };
    let snapshot = execute_assess(query)
        .expect("catalog loads")
        .expect("a sample is eligible");
    assert_eq!(snapshot.sample_name, "Harbour District");
    assert_eq!(snapshot.metrics.bortle_score, 3);
}

#[rstest]
#[case::no_position(None, DEFAULT_MAX_YEAR)]
#[case::before_first_sample(Some(luminight_core::Position::new(37.1, -112.5)), 1990)]
fn assess_yields_nothing_without_data(
    catalog: CatalogFile,
    #[case] position: Option<luminight_core::Position>,
    #[case] year: i32,
) {
    let query = SkyQuery {
        position,
        year,
        ..query_for(&catalog)
    };
    let snapshot = execute_assess(query).expect("catalog loads");
    assert!(snapshot.is_none());
}

#[rstest]
fn missing_catalog_files_are_reported(catalog: CatalogFile) {
    let absent = catalog.root().join("absent.json");
    let query = SkyQuery {
        catalog: absent.clone(),
        ..query_for(&catalog)
    };
    match execute_assess(query) {
        Err(CliError::MissingSourceFile { field, path }) => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(path, absent);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn catalog_directories_are_rejected(catalog: CatalogFile) {
    let query = SkyQuery {
        catalog: catalog.root().to_path_buf(),
        ..query_for(&catalog)
    };
    match execute_assess(query) {
        Err(CliError::SourcePathNotFile { field, .. }) => assert_eq!(field, ARG_CATALOG),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn malformed_catalogs_are_reported(catalog: CatalogFile) {
    let broken = catalog.root().join("broken.json");
    write_utf8(&broken, b"{ not a catalog");
    let query = SkyQuery {
        catalog: broken.clone(),
        ..query_for(&catalog)
    };
    match execute_assess(query) {
        Err(CliError::ParseCatalog { path, .. }) => assert_eq!(path, broken),
        other => panic!("expected ParseCatalog, found {other:?}"),
    }
}

#[rstest]
fn markers_hide_samples_from_later_years(catalog: CatalogFile) {
    let query = SkyQuery {
        year: 2000,
        ..query_for(&catalog)
    };
    let markers = execute_markers(&query).expect("catalog loads");
    assert_eq!(markers.len(), 3);
    let visible: Vec<u64> = markers
        .iter()
        .filter(|marker| marker.visible)
        .map(|marker| marker.sample_id)
        .collect();
    assert_eq!(visible, vec![1, 2]);
}

#[rstest]
fn report_requires_a_query() {
    match SyntheticReport::try_from(ReportArgs::default()) {
        Err(CliError::MissingArgument { field, env }) => {
            assert_eq!(field, ARG_QUERY);
            assert_eq!(env, ENV_REPORT_QUERY);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn report_rejects_blank_queries() {
    let args = ReportArgs {
        query: Some("   ".to_owned()),
    };
    let err = SyntheticReport::try_from(args).expect_err("blank query");
    assert!(matches!(err, CliError::BlankQuery));
}

#[rstest]
fn report_query_can_come_from_the_environment() {
    let mut composer = MergeComposer::new();
    composer.push_environment(json!({ "query": "  Sedona " }));

    let report = crate::report::report_from_layers_for_test(composer.layers())
        .expect("query from environment");
    assert_eq!(report.query, "Sedona");
    let lowered = SyntheticReport::from_query("sedona").expect("non-blank");
    assert_eq!(report.bortle_score, lowered.bortle_score);
    assert_eq!(report.stars_visible_estimate, lowered.stars_visible_estimate);
}

#[rstest]
fn insights_require_an_api_key(catalog: CatalogFile) {
    let args = InsightsArgs {
        catalog: Some(catalog.path().to_path_buf()),
        ..InsightsArgs::default()
    };
    match InsightsConfig::try_from(args) {
        Err(CliError::MissingArgument { field, env }) => {
            assert_eq!(field, ARG_API_KEY);
            assert_eq!(env, ENV_INSIGHTS_API_KEY);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn insights_layers_configure_the_generator(catalog: CatalogFile) {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": catalog.path().as_str(),
            "model": "gemini-from-file",
            "timeout_secs": 5,
        }),
        None,
    );
    composer.push_environment(json!({ "api_key": "secret" }));
    composer.push_cli(json!({ "base_url": "http://127.0.0.1:9" }));

    let config = crate::insights::config_from_layers_for_test(composer.layers())
        .expect("merged config should build");
    assert_eq!(config.gemini.api_key, "secret");
    assert_eq!(config.gemini.model, "gemini-from-file");
    assert_eq!(config.gemini.base_url, "http://127.0.0.1:9");
    assert_eq!(config.gemini.timeout, std::time::Duration::from_secs(5));
    assert_eq!(config.query.catalog.as_path(), catalog.path());
}

#[rstest]
fn insights_args_redact_the_api_key(catalog: CatalogFile) {
    let args = InsightsArgs {
        catalog: Some(catalog.path().to_path_buf()),
        api_key: Some("SUPERSECRETKEY".to_owned()),
        model: Some("gemini-pro".to_owned()),
        ..InsightsArgs::default()
    };
    let rendered = format!("{args:?}");
    assert!(!rendered.contains("SUPERSECRETKEY"), "leaked: {rendered}");
    assert!(rendered.contains("<redacted>"));
    assert!(rendered.contains("gemini-pro"));

    let config = InsightsConfig::try_from(args).expect("config should build");
    assert!(!format!("{config:?}").contains("SUPERSECRETKEY"));
}

#[rstest]
#[case("")]
#[case("your_key_here")]
fn default_builder_rejects_unusable_keys(#[case] key: &str) {
    let result = DefaultInsightGeneratorBuilder.build(&GeminiConfig::new(key));
    assert!(matches!(
        result,
        Err(CliError::BuildGenerator(GeneratorBuildError::MissingApiKey))
    ));
}

#[rstest]
fn write_json_appends_a_newline() {
    let mut buffer = Vec::new();
    write_json(&mut buffer, &json!({ "ok": true })).expect("write to vec");
    let text = String::from_utf8(buffer).expect("utf-8");
    assert!(text.ends_with("}\n"));
}
