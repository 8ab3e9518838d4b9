//! Facade crate for the LumiNight engine.
//!
//! This crate re-exports the light-sample resolver and sky scoring types from
//! `luminight-core` and, behind the `insights` feature, the narrative insight
//! layer from `luminight-insights`.

#![forbid(unsafe_code)]

pub use luminight_core::{
    DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, DEFAULT_REDUCTION_RATE, EARTH_RADIUS_KM, IntensityColor,
    IntensityLevel, LOW_THRESHOLD, LightCatalog, LightSample, MAX_BORTLE, MAX_INTENSITY,
    MIN_BORTLE, MODERATE_THRESHOLD, MarkerStyle, NightComparison, NightMode, Position,
    ReductionRate, ReductionRateError, Resolution, STARGAZING_SPOTS, SkyMetrics, SkySnapshot,
    SyntheticReport, YearRange, YearRangeError, area_light_score, bortle_score, build_metrics,
    clamp_intensity, haversine_km, intensity_color, intensity_level, marker_radius,
    resolve_nearest, restored_intensity, stars_visible,
};

#[cfg(feature = "serde")]
pub use luminight_core::CatalogError;

#[cfg(feature = "insights")]
pub use luminight_insights::{
    GeminiConfig, GeminiInsightGenerator, GeneratorBuildError, InsightError, InsightGenerator,
    InsightRequest, InsightSession, InsightState, SkyInsights,
};
