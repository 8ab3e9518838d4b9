//! The insight generator boundary.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::{InsightError, InsightRequest, SkyInsights};

/// Produce narrative insights for a scored location.
///
/// Implementations must return [`InsightError::Cancelled`] promptly once
/// `cancel` fires and must not report cancellation as any other error.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use luminight_insights::{InsightError, InsightGenerator, InsightRequest, SkyInsights};
/// use tokio_util::sync::CancellationToken;
///
/// struct Canned;
///
/// #[async_trait]
/// impl InsightGenerator for Canned {
///     async fn generate(
///         &self,
///         request: &InsightRequest,
///         cancel: &CancellationToken,
///     ) -> Result<SkyInsights, InsightError> {
///         if cancel.is_cancelled() {
///             return Err(InsightError::Cancelled);
///         }
///         Ok(SkyInsights {
///             stargazing_advice: format!("Head away from {}", request.location_name),
///             ..SkyInsights::default()
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    /// Generate insights for `request`, aborting when `cancel` fires.
    async fn generate(
        &self,
        request: &InsightRequest,
        cancel: &CancellationToken,
    ) -> Result<SkyInsights, InsightError>;
}

#[async_trait]
impl<G> InsightGenerator for std::sync::Arc<G>
where
    G: InsightGenerator + ?Sized,
{
    async fn generate(
        &self,
        request: &InsightRequest,
        cancel: &CancellationToken,
    ) -> Result<SkyInsights, InsightError> {
        (**self).generate(request, cancel).await
    }
}
