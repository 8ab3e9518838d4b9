//! Errors raised while building or running an insight generator.

use thiserror::Error;

/// Errors returned by [`crate::InsightGenerator::generate`].
///
/// [`InsightError::Cancelled`] marks a request that was superseded or shut
/// down. It is not a failure and callers should discard it silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsightError {
    /// The request's cancellation token fired before a response arrived.
    #[error("insight request was cancelled")]
    Cancelled,
    /// The service did not answer within the configured timeout.
    #[error("Gemini request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout in whole seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("Gemini request failed ({status}): {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, or `Unknown error` when the body was empty.
        body: String,
    },
    /// The request never reached the service.
    #[error("Gemini request could not be sent: {message}")]
    Network {
        /// Transport error description.
        message: String,
    },
    /// The response envelope was not valid `generateContent` JSON.
    #[error("Gemini response envelope could not be decoded: {message}")]
    Decode {
        /// Decoder error description.
        message: String,
    },
    /// The candidate carried no text.
    #[error("Gemini returned an empty response.")]
    EmptyResponse,
    /// The candidate text held no JSON object.
    #[error("Gemini response could not be parsed as JSON.")]
    Unparseable,
}

impl InsightError {
    /// Whether this error represents cancellation rather than failure.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Errors returned when constructing a [`crate::GeminiInsightGenerator`].
#[derive(Debug, Error)]
pub enum GeneratorBuildError {
    /// No usable API key was configured.
    #[error("missing Gemini API key")]
    MissingApiKey,
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
