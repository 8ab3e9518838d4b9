//! Test utilities for insight consumers.
//!
//! [`StubInsightGenerator`] is a deterministic [`InsightGenerator`] that
//! answers without any network access and honours cancellation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::{InsightError, InsightGenerator, InsightRequest, SkyInsights};

/// Stub generator returning pre-configured outcomes.
///
/// # Example
///
/// ```
/// use luminight_insights::test_support::StubInsightGenerator;
/// use luminight_insights::{InsightGenerator, InsightRequest};
/// use tokio_util::sync::CancellationToken;
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let stub = StubInsightGenerator::echoing();
/// let insights = stub
///     .generate(&InsightRequest::new("Silver Mesa", 9.0, 8), &CancellationToken::new())
///     .await
///     .expect("stub succeeds");
/// assert!(insights.stargazing_advice.contains("Silver Mesa"));
/// assert_eq!(stub.calls(), 1);
/// # });
/// ```
#[derive(Debug)]
pub struct StubInsightGenerator {
    response: StubResponse,
    delay: Duration,
    calls: AtomicUsize,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Echo,
    Insights(SkyInsights),
    Error(InsightError),
}

impl StubInsightGenerator {
    /// Answer every request with insights naming its location and class.
    #[must_use]
    pub const fn echoing() -> Self {
        Self::from_response(StubResponse::Echo)
    }

    /// Answer every request with `insights`.
    #[must_use]
    pub const fn with_insights(insights: SkyInsights) -> Self {
        Self::from_response(StubResponse::Insights(insights))
    }

    /// Fail every request with `error`.
    #[must_use]
    pub const fn with_error(error: InsightError) -> Self {
        Self::from_response(StubResponse::Error(error))
    }

    /// Wait `delay` before answering, unless cancelled first.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    const fn from_response(response: StubResponse) -> Self {
        Self {
            response,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    fn answer(&self, request: &InsightRequest) -> Result<SkyInsights, InsightError> {
        match &self.response {
            StubResponse::Echo => Ok(SkyInsights {
                stargazing_advice: format!(
                    "Skies over {} sit at Bortle {}.",
                    request.location_name, request.bortle_score
                ),
                environmental_impact_summary: format!(
                    "Skyglow intensity {} affects nocturnal wildlife.",
                    request.intensity
                ),
                lighting_improvement_suggestions: vec![
                    "Use fully shielded fixtures".to_owned(),
                    "Switch to warm colour temperatures".to_owned(),
                ],
            }),
            StubResponse::Insights(insights) => Ok(insights.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}

#[async_trait]
impl InsightGenerator for StubInsightGenerator {
    async fn generate(
        &self,
        request: &InsightRequest,
        cancel: &CancellationToken,
    ) -> Result<SkyInsights, InsightError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(InsightError::Cancelled),
            () = tokio::time::sleep(self.delay) => self.answer(request),
        }
    }
}
