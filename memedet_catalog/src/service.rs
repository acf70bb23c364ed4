use std::sync::Arc;

use memedet_core::{DetectionLimits, DetectionRequest, DetectionResponse, MemeFilter, MemeRepo};
use tracing::debug;

/// Request-level detection over the catalog.
///
/// Each call validates the request, takes a read-only snapshot of the full
/// corpus (popularity descending, id ascending) and runs the pure matching
/// engine over it. Calls are independent; the service holds no mutable
/// state and may be shared across any number of concurrent requests.
pub struct DetectionService {
    memes: Arc<dyn MemeRepo>,
    limits: DetectionLimits,
}

impl DetectionService {
    #[must_use]
    pub fn new(memes: Arc<dyn MemeRepo>) -> Self {
        Self {
            memes,
            limits: DetectionLimits::default(),
        }
    }

    #[must_use]
    pub fn with_limits(memes: Arc<dyn MemeRepo>, limits: DetectionLimits) -> Self {
        Self { memes, limits }
    }

    /// Validate the request, then match its content against the catalog.
    ///
    /// An empty match list is a valid outcome, never an error; only
    /// oversized requests are rejected.
    pub async fn detect(&self, request: &DetectionRequest) -> anyhow::Result<DetectionResponse> {
        self.limits.validate(request)?;

        let corpus = self.memes.list(&MemeFilter::all()).await?;
        let matches = memedet_core::detect(&request.content, &corpus);

        debug!(
            "Detection over {} memes produced {} matches",
            corpus.len(),
            matches.len()
        );

        Ok(DetectionResponse { matches })
    }
}
