//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Only the fields the client reads or writes are modelled; everything else
//! in the response is ignored.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    /// Conversation turns; the client always sends one.
    pub contents: [Content<'a>; 1],
    /// Sampling configuration.
    pub generation_config: GenerationConfig,
}

impl<'a> GenerateContentRequest<'a> {
    /// A single-turn request carrying `prompt`.
    pub const fn single_turn(prompt: &'a str, temperature: f64) -> Self {
        Self {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config: GenerationConfig { temperature },
        }
    }
}

/// One conversation turn.
#[derive(Debug, Serialize)]
pub struct Content<'a> {
    /// Text parts of the turn.
    pub parts: [Part<'a>; 1],
}

/// One text part.
#[derive(Debug, Serialize)]
pub struct Part<'a> {
    /// Prompt text.
    pub text: &'a str,
}

/// Sampling configuration.
#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    /// Sampling temperature.
    pub temperature: f64,
}

/// Response body from `generateContent`.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidate completions, best first.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One candidate completion.
#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    /// Generated content, absent when the candidate was blocked.
    pub content: Option<CandidateContent>,
}

/// Content of a candidate.
#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    /// Generated parts.
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// One generated part.
#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    /// Generated text, absent for non-text parts.
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate: its parts joined by newlines, trimmed.
    ///
    /// Returns an empty string when there is no candidate or no text.
    pub fn first_candidate_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_deref().unwrap_or_default())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default()
            .trim()
            .to_owned()
    }
}
