//! Instrument recommendation contract (analysis only)

use async_trait::async_trait;

/// Suggests instruments worth tracking; never consulted by the decision path
#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn recommendations(&self) -> anyhow::Result<Vec<String>>;
}
