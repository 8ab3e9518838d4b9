//! Request and response payloads exchanged with an insight generator.

use luminight_core::SkySnapshot;
use serde::{Deserialize, Serialize};

/// The scoring context an insight generator receives.
///
/// # Examples
/// ```
/// use luminight_core::{LightSample, NightMode, Position, ReductionRate, SkySnapshot};
/// use luminight_insights::InsightRequest;
///
/// let samples = vec![LightSample::new(7, "Harbour", 0.0, 0.0, 2001, 90.0)];
/// let snapshot = SkySnapshot::assess(
///     &samples,
///     Some(&Position::new(0.0, 0.0)),
///     2025,
///     NightMode::Restored,
///     ReductionRate::default(),
/// )
/// .expect("harbour is eligible");
///
/// let request = InsightRequest::from_snapshot(&snapshot);
/// assert_eq!(request.location_name, "Harbour");
/// assert_eq!(request.intensity, 54.0);
/// assert_eq!(request.bortle_score, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    /// Name of the resolved sample.
    pub location_name: String,
    /// Intensity the metrics were computed from, after any restoration.
    pub intensity: f64,
    /// Bortle class for `intensity`.
    pub bortle_score: u8,
}

impl InsightRequest {
    /// Build a request for an arbitrary location.
    #[must_use]
    pub fn new(location_name: impl Into<String>, intensity: f64, bortle_score: u8) -> Self {
        Self {
            location_name: location_name.into(),
            intensity,
            bortle_score,
        }
    }

    /// Build the request for a scored snapshot.
    ///
    /// Uses the mode-adjusted intensity so the generator sees the same sky
    /// as the score card.
    #[must_use]
    pub fn from_snapshot(snapshot: &SkySnapshot) -> Self {
        Self::new(
            snapshot.sample_name.clone(),
            snapshot.effective_intensity,
            snapshot.metrics.bortle_score,
        )
    }
}

/// Narrative insights about the night sky at a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkyInsights {
    /// Advice for stargazing tonight.
    pub stargazing_advice: String,
    /// Summary of the environmental impact of local skyglow.
    pub environmental_impact_summary: String,
    /// Short, non-empty lighting improvement suggestions.
    pub lighting_improvement_suggestions: Vec<String>,
}
