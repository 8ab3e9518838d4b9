//! Map marker styling for catalogued samples.
//!
//! Markers for samples newer than the selected year stay on the map but
//! collapse to an invisible dot, so moving the timeline never adds or
//! removes markers.

use crate::{
    IntensityColor, LightSample, NightMode, ReductionRate, bortle_score, clamp_intensity,
    intensity_color,
};

const BASE_RADIUS: f64 = 5.0;
const RADIUS_SPAN: f64 = 6.0;
const HIDDEN_RADIUS: f64 = 1.0;
const VISIBLE_FILL_OPACITY: f64 = 0.9;
const VISIBLE_STROKE_OPACITY: f64 = 0.95;

/// Styling for one sample's map marker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarkerStyle {
    /// Identifier of the styled sample.
    pub sample_id: u64,
    /// Whether the sample is eligible for the selected year.
    pub visible: bool,
    /// Circle radius in screen pixels.
    pub radius: f64,
    /// Stroke and fill colour.
    pub color: IntensityColor,
    /// Fill opacity in `0.0..=1.0`.
    pub fill_opacity: f64,
    /// Stroke opacity in `0.0..=1.0`.
    pub opacity: f64,
    /// Intensity after applying the night mode.
    pub effective_intensity: f64,
    /// Bortle class shown in the marker popup.
    pub bortle_score: u8,
}

impl MarkerStyle {
    /// Style `sample` for the selected `year` and `mode`.
    ///
    /// # Examples
    /// ```
    /// use luminight_core::{LightSample, MarkerStyle, NightMode, ReductionRate};
    ///
    /// let sample = LightSample::new(1, "Depot", 0.0, 0.0, 2010, 100.0);
    /// let style = MarkerStyle::for_sample(&sample, 2025, NightMode::Current, ReductionRate::default());
    /// assert!(style.visible);
    /// assert_eq!(style.radius, 11.0);
    ///
    /// let hidden = MarkerStyle::for_sample(&sample, 2000, NightMode::Current, ReductionRate::default());
    /// assert!(!hidden.visible);
    /// assert_eq!(hidden.opacity, 0.0);
    /// ```
    #[must_use]
    pub fn for_sample(
        sample: &LightSample,
        year: i32,
        mode: NightMode,
        rate: ReductionRate,
    ) -> Self {
        let effective_intensity = mode.effective_intensity(sample.intensity, rate);
        let visible = sample.is_eligible(year);
        let (radius, fill_opacity, opacity) = if visible {
            (
                marker_radius(effective_intensity),
                VISIBLE_FILL_OPACITY,
                VISIBLE_STROKE_OPACITY,
            )
        } else {
            (HIDDEN_RADIUS, 0.0, 0.0)
        };
        Self {
            sample_id: sample.id,
            visible,
            radius,
            color: intensity_color(effective_intensity),
            fill_opacity,
            opacity,
            effective_intensity,
            bortle_score: bortle_score(effective_intensity),
        }
    }
}

/// Radius of a visible marker: `5 + clamp(intensity) / 100 * 6`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "marker size scales linearly with intensity"
)]
pub fn marker_radius(intensity: f64) -> f64 {
    BASE_RADIUS + clamp_intensity(intensity) / 100.0 * RADIUS_SPAN
}
