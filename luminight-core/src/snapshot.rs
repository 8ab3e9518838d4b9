//! One-call resolution and scoring shared by every presentation layer.

use crate::{
    LightSample, NightComparison, NightMode, Position, ReductionRate, SkyMetrics, build_metrics,
    resolve_nearest,
};

/// Everything a view needs to describe the sky at the observer's position.
///
/// Built once per (position, year, mode) and handed to every consumer so
/// score cards, comparisons and insight requests can never disagree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SkySnapshot {
    /// Identifier of the nearest eligible sample.
    pub sample_id: u64,
    /// Name of the nearest eligible sample.
    pub sample_name: String,
    /// Great-circle distance to the sample in kilometres.
    pub distance_km: f64,
    /// Year the sample represents.
    pub sample_year: i32,
    /// Mode the headline metrics were computed for.
    pub mode: NightMode,
    /// Intensity stored in the catalog.
    pub raw_intensity: f64,
    /// Intensity actually scored for `mode`.
    pub effective_intensity: f64,
    /// Headline metrics for `effective_intensity`.
    pub metrics: SkyMetrics,
    /// Current versus restored metrics for the same sample.
    pub comparison: NightComparison,
}

impl SkySnapshot {
    /// Resolve the nearest sample and score it.
    ///
    /// Returns `None` when no metrics are available: the position is unknown,
    /// the catalog is empty, or nothing is eligible for `year`.
    ///
    /// # Examples
    /// ```
    /// use luminight_core::{LightSample, NightMode, Position, ReductionRate, SkySnapshot};
    ///
    /// let samples = vec![LightSample::new(1, "Ridge", 0.0, 0.0, 2000, 50.0)];
    /// let here = Position::new(0.0, 0.1);
    ///
    /// let snapshot = SkySnapshot::assess(
    ///     &samples,
    ///     Some(&here),
    ///     2025,
    ///     NightMode::Restored,
    ///     ReductionRate::default(),
    /// )
    /// .expect("ridge is eligible");
    /// assert_eq!(snapshot.effective_intensity, 30.0);
    /// assert_eq!(snapshot.metrics.bortle_score, 7);
    /// assert_eq!(snapshot.comparison.current.bortle_score, 5);
    /// ```
    #[must_use]
    pub fn assess(
        samples: &[LightSample],
        position: Option<&Position>,
        year: i32,
        mode: NightMode,
        rate: ReductionRate,
    ) -> Option<Self> {
        let resolution = resolve_nearest(samples, position, year)?;
        let sample = resolution.sample;
        let effective_intensity = mode.effective_intensity(sample.intensity, rate);
        Some(Self {
            sample_id: sample.id,
            sample_name: sample.name.clone(),
            distance_km: resolution.distance_km,
            sample_year: sample.year,
            mode,
            raw_intensity: sample.intensity,
            effective_intensity,
            metrics: build_metrics(effective_intensity),
            comparison: NightComparison::from_resolution(&resolution, rate),
        })
    }

    /// Metrics for the requested mode taken from the comparison.
    ///
    /// Always equal to [`SkySnapshot::metrics`].
    #[must_use]
    pub const fn metrics_for_mode(&self) -> &SkyMetrics {
        match self.mode {
            NightMode::Current => &self.comparison.current,
            NightMode::Restored => &self.comparison.restored,
        }
    }
}
