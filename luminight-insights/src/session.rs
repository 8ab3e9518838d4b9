//! Supersede-on-request insight sessions.
//!
//! A session owns at most one in-flight request. Starting a new request
//! cancels the previous token before the generator is called, and a result
//! is only recorded while its request is still the newest one. Cancellation
//! is discarded silently; every other error becomes [`InsightState::Failed`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;

use crate::{InsightError, InsightGenerator, InsightRequest, SkyInsights};

/// Observable state of an [`InsightSession`].
#[derive(Debug, Clone, PartialEq)]
pub enum InsightState {
    /// Nothing requested yet, or the session was shut down.
    Idle,
    /// A request is in flight.
    Loading {
        /// The request being served.
        request: InsightRequest,
    },
    /// The newest request completed.
    Ready(SkyInsights),
    /// The newest request failed.
    Failed(InsightError),
}

#[derive(Debug)]
struct Slot {
    generation: u64,
    token: Option<CancellationToken>,
    state: InsightState,
}

/// Serialises insight requests so only the newest one can land.
///
/// Cloning a session yields another handle to the same state.
///
/// # Examples
/// ```
/// use luminight_insights::test_support::StubInsightGenerator;
/// use luminight_insights::{InsightRequest, InsightSession, InsightState};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let session = InsightSession::new(StubInsightGenerator::echoing());
/// let state = session.request(InsightRequest::new("Cedar Valley", 34.0, 6)).await;
/// assert!(matches!(state, InsightState::Ready(_)));
/// # });
/// ```
#[derive(Debug)]
pub struct InsightSession<G> {
    generator: Arc<G>,
    slot: Arc<Mutex<Slot>>,
}

impl<G> Clone for InsightSession<G> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<G: InsightGenerator> InsightSession<G> {
    /// Create an idle session around `generator`.
    #[must_use]
    pub fn new(generator: G) -> Self {
        Self {
            generator: Arc::new(generator),
            slot: Arc::new(Mutex::new(Slot {
                generation: 0,
                token: None,
                state: InsightState::Idle,
            })),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> InsightState {
        self.lock().state.clone()
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.lock().state, InsightState::Loading { .. })
    }

    /// Run `request`, superseding any request already in flight.
    ///
    /// Returns the session state once this request settles. When a newer
    /// request or [`InsightSession::shutdown`] overtook this one, its outcome
    /// is dropped and the state reflects the newer activity instead.
    pub async fn request(&self, request: InsightRequest) -> InsightState {
        let (generation, token) = self.begin(&request);
        let outcome = self.generator.generate(&request, &token).await;
        self.settle(generation, outcome)
    }

    /// Cancel any in-flight request and return to [`InsightState::Idle`].
    pub fn shutdown(&self) {
        let mut slot = self.lock();
        slot.generation = slot.generation.wrapping_add(1);
        if let Some(token) = slot.token.take() {
            token.cancel();
        }
        slot.state = InsightState::Idle;
        log::debug!("insight session shut down");
    }

    fn begin(&self, request: &InsightRequest) -> (u64, CancellationToken) {
        let mut slot = self.lock();
        if let Some(previous) = slot.token.take() {
            previous.cancel();
            log::debug!("superseded in-flight insight request");
        }
        let token = CancellationToken::new();
        slot.generation = slot.generation.wrapping_add(1);
        slot.token = Some(token.clone());
        slot.state = InsightState::Loading {
            request: request.clone(),
        };
        (slot.generation, token)
    }

    fn settle(&self, generation: u64, outcome: Result<SkyInsights, InsightError>) -> InsightState {
        let mut slot = self.lock();
        if slot.generation != generation {
            return slot.state.clone();
        }
        slot.token = None;
        slot.state = match outcome {
            Ok(insights) => InsightState::Ready(insights),
            Err(InsightError::Cancelled) => InsightState::Idle,
            Err(err) => {
                log::warn!("insight request failed: {err}");
                InsightState::Failed(err)
            }
        };
        slot.state.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<G> Drop for InsightSession<G> {
    fn drop(&mut self) {
        if Arc::strong_count(&self.slot) == 1 {
            let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(token) = slot.token.as_ref() {
                token.cancel();
            }
        }
    }
}
