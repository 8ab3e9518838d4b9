//! Sky-quality metrics derived from a single intensity value.
//!
//! Every function here is total: inputs are clamped into their documented
//! domain before use and non-finite values are sanitised, so no numeric input
//! can panic or leak NaN into a score. [`build_metrics`] is the entry point
//! consumers should prefer because it guarantees the star estimate matches the
//! reported Bortle class.
//!
//! Rounding is half away from zero (`f64::round`). Every rounded quantity is
//! non-negative, so this agrees with rounding half up.

use std::fmt;
use std::str::FromStr;

/// Upper bound of the intensity domain.
pub const MAX_INTENSITY: f64 = 100.0;
/// Darkest Bortle class produced by the engine.
pub const MIN_BORTLE: u8 = 1;
/// Brightest Bortle class produced by the engine.
pub const MAX_BORTLE: u8 = 9;
/// Intensities at or below this bound are [`IntensityLevel::Low`].
pub const LOW_THRESHOLD: f64 = 33.0;
/// Intensities at or below this bound (and above [`LOW_THRESHOLD`]) are
/// [`IntensityLevel::Moderate`].
pub const MODERATE_THRESHOLD: f64 = 66.0;

const BORTLE_STEP: f64 = 12.5;
const STARS_AT_CLASS_ONE: f64 = 5000.0;
const STARS_LOST_PER_CLASS: f64 = 525.0;

/// Coarse brightness category shared by the score card and map colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntensityLevel {
    /// `intensity <= 33`.
    Low,
    /// `33 < intensity <= 66`.
    Moderate,
    /// `intensity > 66`.
    High,
}

impl IntensityLevel {
    /// Return the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Colour used to draw markers of this level.
    #[must_use]
    pub const fn color(self) -> IntensityColor {
        match self {
            Self::Low => IntensityColor::Green,
            Self::Moderate => IntensityColor::Yellow,
            Self::High => IntensityColor::Red,
        }
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntensityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown intensity level '{s}'")),
        }
    }
}

/// Presentation colour for an intensity, aligned with [`IntensityLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IntensityColor {
    /// Dark skies.
    Green,
    /// Noticeable skyglow.
    Yellow,
    /// Heavy skyglow.
    Red,
}

impl IntensityColor {
    /// Return the colour as a CSS hex string.
    ///
    /// # Examples
    /// ```
    /// use luminight_core::{IntensityColor, intensity_color};
    ///
    /// assert_eq!(intensity_color(80.0), IntensityColor::Red);
    /// assert_eq!(IntensityColor::Red.hex(), "#ef4444");
    /// ```
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#22c55e",
            Self::Yellow => "#eab308",
            Self::Red => "#ef4444",
        }
    }
}

/// Derived sky-quality figures for one intensity value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkyMetrics {
    /// Darkness quality in `0..=100`; higher is darker.
    pub area_light_score: u8,
    /// Bortle class in `1..=9`.
    pub bortle_score: u8,
    /// Estimated number of naked-eye stars for `bortle_score`.
    pub stars_visible: u32,
    /// Coarse brightness category.
    pub intensity_level: IntensityLevel,
    /// The intensity the figures were derived from, exactly as given.
    pub intensity: f64,
}

/// Clamp an intensity into `0.0..=100.0`.
///
/// NaN maps to `0.0`; infinities clamp to the nearest bound.
#[must_use]
pub fn clamp_intensity(intensity: f64) -> f64 {
    if intensity.is_nan() {
        return 0.0;
    }
    intensity.clamp(0.0, MAX_INTENSITY)
}

/// Categorise an intensity as low, moderate or high.
#[must_use]
pub fn intensity_level(intensity: f64) -> IntensityLevel {
    let value = clamp_intensity(intensity);
    if value <= LOW_THRESHOLD {
        IntensityLevel::Low
    } else if value <= MODERATE_THRESHOLD {
        IntensityLevel::Moderate
    } else {
        IntensityLevel::High
    }
}

/// Map an intensity to its marker colour.
///
/// Always agrees with [`intensity_level`] because it is derived from it.
#[must_use]
pub fn intensity_color(intensity: f64) -> IntensityColor {
    intensity_level(intensity).color()
}

/// Estimate the Bortle class for an intensity.
///
/// Computes `round(9 - clamp(intensity) / 12.5)` and clamps the result into
/// `1..=9`. The mapping is monotonically non-increasing in intensity.
///
/// # Examples
/// ```
/// use luminight_core::bortle_score;
///
/// assert_eq!(bortle_score(0.0), 9);
/// assert_eq!(bortle_score(50.0), 5);
/// assert_eq!(bortle_score(100.0), 1);
/// assert_eq!(bortle_score(f64::NAN), 9);
/// assert_eq!(bortle_score(-40.0), 9);
/// assert_eq!(bortle_score(1e9), 1);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the class is a rounded linear map already clamped into 1..=9"
)]
pub fn bortle_score(intensity: f64) -> u8 {
    let raw = (f64::from(MAX_BORTLE) - clamp_intensity(intensity) / BORTLE_STEP).round();
    raw.clamp(f64::from(MIN_BORTLE), f64::from(MAX_BORTLE)) as u8
}

/// Estimate how many stars are visible under a Bortle class.
///
/// Computes `round(5000 - (clamp(bortle, 1, 9) - 1) * 525)`.
///
/// # Examples
/// ```
/// use luminight_core::stars_visible;
///
/// assert_eq!(stars_visible(1), 5000);
/// assert_eq!(stars_visible(9), 800);
/// assert_eq!(stars_visible(0), 5000);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the estimate is a rounded linear map bounded by 800..=5000"
)]
pub fn stars_visible(bortle_score: u8) -> u32 {
    let class = f64::from(bortle_score.clamp(MIN_BORTLE, MAX_BORTLE));
    (STARS_AT_CLASS_ONE - (class - 1.0) * STARS_LOST_PER_CLASS).round() as u32
}

/// Darkness quality score, `round(100 - clamp(intensity))`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the score is a rounded inversion of a value clamped into 0..=100"
)]
pub fn area_light_score(intensity: f64) -> u8 {
    (MAX_INTENSITY - clamp_intensity(intensity)).round() as u8
}

/// Simulate a reduction of artificial light without touching the source.
///
/// Computes `round(clamp(intensity) * (1 - reduction_rate))` bounded to
/// `0..=100`. The rate is clamped into `0.0..=1.0`; a NaN rate applies no
/// reduction. See [`crate::ReductionRate`] for a validated rate type.
///
/// # Examples
/// ```
/// use luminight_core::restored_intensity;
///
/// assert_eq!(restored_intensity(80.0, 0.4), 48);
/// assert_eq!(restored_intensity(80.0, 0.0), 80);
/// assert_eq!(restored_intensity(80.0, 1.0), 0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the restored value is rounded and clamped into 0..=100"
)]
pub fn restored_intensity(intensity: f64, reduction_rate: f64) -> u8 {
    let rate = if reduction_rate.is_nan() {
        0.0
    } else {
        reduction_rate.clamp(0.0, 1.0)
    };
    (clamp_intensity(intensity) * (1.0 - rate))
        .round()
        .clamp(0.0, MAX_INTENSITY) as u8
}

/// Compute the full, self-consistent metrics bundle for an intensity.
///
/// Every figure is derived from the clamped intensity, while
/// [`SkyMetrics::intensity`] echoes the argument unchanged, so a reading of
/// 140 reports 140 alongside the figures for 100.
///
/// # Examples
/// ```
/// use luminight_core::{IntensityLevel, build_metrics};
///
/// let dark = build_metrics(0.0);
/// assert_eq!(dark.bortle_score, 9);
/// assert_eq!(dark.stars_visible, 800);
/// assert_eq!(dark.area_light_score, 100);
/// assert_eq!(dark.intensity_level, IntensityLevel::Low);
///
/// let bright = build_metrics(100.0);
/// assert_eq!(bright.bortle_score, 1);
/// assert_eq!(bright.stars_visible, 5000);
/// assert_eq!(bright.area_light_score, 0);
/// assert_eq!(bright.intensity_level, IntensityLevel::High);
/// ```
#[must_use]
pub fn build_metrics(intensity: f64) -> SkyMetrics {
    let bortle = bortle_score(intensity);
    SkyMetrics {
        area_light_score: area_light_score(intensity),
        bortle_score: bortle,
        stars_visible: stars_visible(bortle),
        intensity_level: intensity_level(intensity),
        intensity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, IntensityLevel::Low)]
    #[case(33.0, IntensityLevel::Low)]
    #[case(33.5, IntensityLevel::Moderate)]
    #[case(66.0, IntensityLevel::Moderate)]
    #[case(66.1, IntensityLevel::High)]
    #[case(250.0, IntensityLevel::High)]
    #[case(-5.0, IntensityLevel::Low)]
    #[case(f64::NAN, IntensityLevel::Low)]
    fn level_thresholds(#[case] intensity: f64, #[case] expected: IntensityLevel) {
        assert_eq!(intensity_level(intensity), expected);
    }

    #[rstest]
    #[case(10.0, IntensityColor::Green)]
    #[case(50.0, IntensityColor::Yellow)]
    #[case(90.0, IntensityColor::Red)]
    fn color_tracks_level(#[case] intensity: f64, #[case] expected: IntensityColor) {
        assert_eq!(intensity_color(intensity), expected);
        assert_eq!(intensity_level(intensity).color(), expected);
    }

    #[rstest]
    #[case(6.25, 9)]
    #[case(18.75, 8)]
    #[case(12.5, 8)]
    #[case(43.75, 6)]
    #[case(93.75, 2)]
    #[case(f64::INFINITY, 1)]
    #[case(f64::NEG_INFINITY, 9)]
    fn bortle_rounds_half_away_from_zero(#[case] intensity: f64, #[case] expected: u8) {
        assert_eq!(bortle_score(intensity), expected);
    }

    #[rstest]
    #[case(5, 2900)]
    #[case(2, 4475)]
    #[case(42, 800)]
    fn stars_follow_the_linear_model(#[case] bortle: u8, #[case] expected: u32) {
        assert_eq!(stars_visible(bortle), expected);
    }

    #[rstest]
    #[case(37.4, 63)]
    #[case(-12.0, 100)]
    #[case(180.0, 0)]
    fn area_score_inverts_intensity(#[case] intensity: f64, #[case] expected: u8) {
        assert_eq!(area_light_score(intensity), expected);
    }

    #[rstest]
    #[case(150.0, 0.4, 60)]
    #[case(55.0, 0.4, 33)]
    #[case(55.0, -1.0, 55)]
    #[case(55.0, 2.0, 0)]
    #[case(55.0, f64::NAN, 55)]
    fn restoration_is_bounded(#[case] intensity: f64, #[case] rate: f64, #[case] expected: u8) {
        assert_eq!(restored_intensity(intensity, rate), expected);
    }

    #[rstest]
    fn metrics_bundle_is_self_consistent() {
        let metrics = build_metrics(72.0);
        assert_eq!(metrics.bortle_score, bortle_score(72.0));
        assert_eq!(metrics.stars_visible, stars_visible(metrics.bortle_score));
        assert_eq!(metrics.intensity_level, IntensityLevel::High);
        assert_eq!(metrics.intensity, 72.0);
    }

    #[rstest]
    #[case(140.0)]
    #[case(-12.5)]
    #[case(37.4)]
    fn metrics_echo_the_intensity_as_given(#[case] intensity: f64) {
        let metrics = build_metrics(intensity);
        assert_eq!(metrics.intensity, intensity);
        assert_eq!(metrics.bortle_score, bortle_score(clamp_intensity(intensity)));
    }

    #[rstest]
    fn metrics_echo_nan_without_letting_it_into_the_figures() {
        let metrics = build_metrics(f64::NAN);
        assert!(metrics.intensity.is_nan());
        assert_eq!(metrics.bortle_score, 9);
        assert_eq!(metrics.area_light_score, 100);
    }

    #[rstest]
    fn level_parsing_is_case_insensitive() {
        assert_eq!("MODERATE".parse::<IntensityLevel>(), Ok(IntensityLevel::Moderate));
        assert!("dim".parse::<IntensityLevel>().is_err());
    }
}
