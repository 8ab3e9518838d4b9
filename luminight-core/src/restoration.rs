//! "Restore the night" simulation: score a hypothetical reduction in
//! artificial light next to the current conditions.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{Resolution, SkyMetrics, build_metrics, restored_intensity};

/// Reduction applied when no rate is configured.
pub const DEFAULT_REDUCTION_RATE: f64 = 0.4;

/// Fraction of artificial light removed by the restoration scenario.
///
/// # Examples
/// ```
/// use luminight_core::ReductionRate;
///
/// let rate = ReductionRate::new(0.25)?;
/// assert_eq!(rate.apply(80.0), 60);
/// assert_eq!(ReductionRate::default().get(), 0.4);
/// # Ok::<(), luminight_core::ReductionRateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReductionRate(f64);

/// Errors returned by [`ReductionRate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ReductionRateError {
    /// The rate was NaN or infinite.
    #[error("reduction rate must be a finite number")]
    NotFinite,
    /// The rate fell outside `0.0..=1.0`.
    #[error("reduction rate {0} must be between 0.0 and 1.0")]
    OutOfRange(f64),
}

impl ReductionRate {
    /// Validate and construct a rate in `0.0..=1.0`.
    ///
    /// # Errors
    /// Returns [`ReductionRateError`] for non-finite or out-of-range values.
    pub fn new(rate: f64) -> Result<Self, ReductionRateError> {
        if !rate.is_finite() {
            return Err(ReductionRateError::NotFinite);
        }
        if !(0.0..=1.0).contains(&rate) {
            return Err(ReductionRateError::OutOfRange(rate));
        }
        Ok(Self(rate))
    }

    /// Return the raw fraction.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Restored intensity for `intensity` under this rate.
    #[must_use]
    pub fn apply(self, intensity: f64) -> u8 {
        restored_intensity(intensity, self.0)
    }
}

impl Default for ReductionRate {
    fn default() -> Self {
        Self(DEFAULT_REDUCTION_RATE)
    }
}

/// Which intensity a view should score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NightMode {
    /// Score the catalogued intensity.
    #[default]
    Current,
    /// Score the intensity after the restoration scenario.
    Restored,
}

impl NightMode {
    /// Return the mode as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Restored => "restored",
        }
    }

    /// Intensity to score for `raw` under this mode.
    #[must_use]
    pub fn effective_intensity(self, raw: f64, rate: ReductionRate) -> f64 {
        match self {
            Self::Current => raw,
            Self::Restored => f64::from(rate.apply(raw)),
        }
    }
}

impl fmt::Display for NightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NightMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "current" => Ok(Self::Current),
            "restored" => Ok(Self::Restored),
            _ => Err(format!("unknown night mode '{s}'")),
        }
    }
}

/// Side-by-side metrics for the current and restored skies at one sample.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NightComparison {
    /// Name of the sample both sides were computed from.
    pub sample_name: String,
    /// Metrics for the catalogued intensity.
    pub current: SkyMetrics,
    /// Metrics after the restoration scenario.
    pub restored: SkyMetrics,
}

impl NightComparison {
    /// Compare current and restored metrics for a resolved sample.
    ///
    /// # Examples
    /// ```
    /// use luminight_core::{LightSample, NightComparison, Position, ReductionRate, resolve_nearest};
    ///
    /// let samples = vec![LightSample::new(1, "Harbour", 0.0, 0.0, 2010, 80.0)];
    /// let here = Position::new(0.0, 0.0);
    /// let resolution = resolve_nearest(&samples, Some(&here), 2025).expect("resolved");
    ///
    /// let comparison = NightComparison::from_resolution(&resolution, ReductionRate::default());
    /// assert_eq!(comparison.current.intensity, 80.0);
    /// assert_eq!(comparison.restored.intensity, 48.0);
    /// assert!(comparison.restored.bortle_score > comparison.current.bortle_score);
    /// ```
    #[must_use]
    pub fn from_resolution(resolution: &Resolution<'_>, rate: ReductionRate) -> Self {
        let raw = resolution.sample.intensity;
        Self {
            sample_name: resolution.sample.name.clone(),
            current: build_metrics(raw),
            restored: build_metrics(f64::from(rate.apply(raw))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LightSample;
    use rstest::rstest;

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    fn rejects_out_of_range_rates(#[case] rate: f64) {
        assert_eq!(
            ReductionRate::new(rate),
            Err(ReductionRateError::OutOfRange(rate))
        );
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_non_finite_rates(#[case] rate: f64) {
        assert_eq!(ReductionRate::new(rate), Err(ReductionRateError::NotFinite));
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    fn accepts_boundary_rates(#[case] rate: f64) {
        assert!(ReductionRate::new(rate).is_ok());
    }

    #[rstest]
    fn restored_mode_scores_the_reduced_intensity() {
        let rate = ReductionRate::default();
        assert_eq!(NightMode::Current.effective_intensity(75.0, rate), 75.0);
        assert_eq!(NightMode::Restored.effective_intensity(75.0, rate), 45.0);
    }

    #[rstest]
    fn comparison_leaves_the_sample_untouched() {
        let sample = LightSample::new(3, "Mill Town", 1.0, 1.0, 2001, 66.0);
        let before = sample.clone();
        let resolution = Resolution {
            sample: &sample,
            distance_km: 0.0,
        };
        let comparison = NightComparison::from_resolution(&resolution, ReductionRate::default());
        assert_eq!(sample, before);
        assert_eq!(comparison.sample_name, "Mill Town");
        assert_eq!(comparison.restored.intensity, 40.0);
    }

    #[rstest]
    #[case("Restored", NightMode::Restored)]
    #[case(" current ", NightMode::Current)]
    fn parses_modes(#[case] raw: &str, #[case] expected: NightMode) {
        assert_eq!(raw.parse::<NightMode>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_modes() {
        let err = "dusk".parse::<NightMode>().unwrap_err();
        assert!(err.contains("unknown night mode"));
    }
}
