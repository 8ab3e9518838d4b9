//! Lenient decoding of model text into [`SkyInsights`].
//!
//! Models sometimes wrap the requested JSON in prose or code fences. The
//! text is parsed as JSON first; failing that, the span from the first `{`
//! to the last `}` is tried.

use serde_json::{Map, Value};

use crate::{InsightError, SkyInsights};

/// Decode model output into insights.
///
/// # Errors
/// Returns [`InsightError::Unparseable`] when neither the whole text nor its
/// outermost brace span is a JSON object.
pub fn parse_insights(text: &str) -> Result<SkyInsights, InsightError> {
    let object = parse_object(text).ok_or(InsightError::Unparseable)?;
    Ok(SkyInsights {
        stargazing_advice: text_field(object.get("stargazingAdvice")),
        environmental_impact_summary: text_field(object.get("environmentalImpactSummary")),
        lighting_improvement_suggestions: suggestions(object.get("lightingImprovementSuggestions")),
    })
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    if let Ok(Value::Object(object)) = serde_json::from_str(text) {
        return Some(object);
    }
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    let span = text.get(start..=end)?;
    match serde_json::from_str(span) {
        Ok(Value::Object(object)) => {
            log::warn!("recovered insights from surrounding text");
            Some(object)
        }
        _ => None,
    }
}

/// Trimmed text for a scalar field; missing, null, false and zero are blank.
fn text_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => String::new(),
        Some(Value::String(text)) => text.trim().to_owned(),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => String::new(),
        Some(other) => other.to_string().trim().to_owned(),
    }
}

/// Non-blank trimmed suggestions; anything other than an array is empty.
fn suggestions(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(text) => text.trim().to_owned(),
            other => other.to_string(),
        })
        .filter(|item| !item.is_empty())
        .collect()
}
