//! Core domain logic for the LumiNight engine.
//!
//! Given a catalog of light-pollution samples, the crate resolves the
//! sample nearest to an observer, restricted to samples recorded on or
//! before a selected year, and derives night-sky quality metrics from its
//! intensity. It also models the "restored night" counterfactual, marker
//! styling for map views and the placeholder search reports.
//!
//! Everything here is pure and synchronous. Samples are borrowed from the
//! catalog rather than copied.
//!
//! # Examples
//!
//! ```
//! use luminight_core::{LightCatalog, LightSample, NightMode, Position, ReductionRate, SkySnapshot};
//!
//! let catalog = LightCatalog::new(vec![
//!     LightSample::new(1, "Old Town", 51.5, -0.12, 1998, 82.0),
//!     LightSample::new(2, "Heath", 51.56, -0.16, 2004, 40.0),
//! ]);
//! let here = Position::new(51.55, -0.15);
//! let snapshot = SkySnapshot::assess(
//!     catalog.samples(),
//!     Some(&here),
//!     2025,
//!     NightMode::Current,
//!     ReductionRate::default(),
//! )
//! .expect("an eligible sample exists");
//! assert_eq!(snapshot.sample_name, "Heath");
//! assert_eq!(snapshot.metrics.bortle_score, 6);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod geodesy;
pub mod marker;
pub mod resolver;
pub mod restoration;
pub mod sample;
pub mod scoring;
pub mod snapshot;
pub mod synthetic;
pub mod timeline;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::LightCatalog;
#[cfg(feature = "serde")]
pub use catalog::CatalogError;
pub use geodesy::{EARTH_RADIUS_KM, haversine_km};
pub use marker::{MarkerStyle, marker_radius};
pub use resolver::{Resolution, resolve_nearest};
pub use restoration::{
    DEFAULT_REDUCTION_RATE, NightComparison, NightMode, ReductionRate, ReductionRateError,
};
pub use sample::{LightSample, Position};
pub use scoring::{
    IntensityColor, IntensityLevel, LOW_THRESHOLD, MAX_BORTLE, MAX_INTENSITY, MIN_BORTLE,
    MODERATE_THRESHOLD, SkyMetrics, area_light_score, bortle_score, build_metrics,
    clamp_intensity, intensity_color, intensity_level, restored_intensity, stars_visible,
};
pub use snapshot::SkySnapshot;
pub use synthetic::{STARGAZING_SPOTS, SyntheticReport};
pub use timeline::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, YearRange, YearRangeError};
