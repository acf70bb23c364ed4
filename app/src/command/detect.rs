use std::path::PathBuf;
use std::sync::Arc;

use memedet_catalog::DetectionService;
use memedet_config::Config;
use memedet_core::DetectionRequest;
use tracing::info;

/// Input for the detect command.
pub struct DetectInput {
    /// Text content to analyze.
    pub content: Option<String>,
    /// Read content from a file instead.
    pub file: Option<PathBuf>,
    /// Image URLs, accepted for forward compatibility and never inspected.
    pub image_urls: Vec<String>,
}

/// Strategy for matching text content against the catalog.
///
/// Prints the detection response as JSON, strongest match first.
#[derive(Debug, Clone, Copy)]
pub struct DetectStrategy;

impl super::CommandStrategy for DetectStrategy {
    type Input = DetectInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let store = super::open_store(&config).await?;

        let content = match (input.content, input.file) {
            (Some(content), _) => content,
            (None, Some(path)) => std::fs::read_to_string(&path)?,
            (None, None) => anyhow::bail!("Provide content via --content or --file"),
        };

        let service = DetectionService::with_limits(Arc::new(store), config.detection.limits);
        let request = DetectionRequest {
            content,
            image_urls: input.image_urls,
        };

        let response = service.detect(&request).await?;
        info!("Detection produced {} matches", response.matches.len());

        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}
