//! Prompt text sent to text-generation models.

use crate::InsightRequest;

/// Render the instruction prompt for `request`.
///
/// The prompt asks for a bare JSON object with the camelCase keys of
/// [`crate::SkyInsights`].
///
/// # Examples
/// ```
/// use luminight_insights::{InsightRequest, build_prompt};
///
/// let prompt = build_prompt(&InsightRequest::new("Silver Mesa", 9.0, 8));
/// assert!(prompt.contains("Location: Silver Mesa"));
/// assert!(prompt.contains("Light intensity: 9 (0-100"));
/// ```
#[must_use]
pub fn build_prompt(request: &InsightRequest) -> String {
    [
        "You are helping a stargazer understand local night-sky conditions.".to_owned(),
        format!("Location: {}", request.location_name),
        format!(
            "Light intensity: {} (0-100, higher means brighter skyglow)",
            request.intensity
        ),
        format!("Estimated Bortle score: {}", request.bortle_score),
        "Return strict JSON with keys:".to_owned(),
        "stargazingAdvice (string), environmentalImpactSummary (string), \
         lightingImprovementSuggestions (array of short strings)."
            .to_owned(),
        "Do not include markdown code fences.".to_owned(),
    ]
    .join("\n")
}
