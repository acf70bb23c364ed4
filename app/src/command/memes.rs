use memedet_config::Config;
use memedet_core::{MemeFilter, MemeRepo};

/// Input for the memes listing command.
pub struct MemesInput {
    pub category: Option<String>,
    pub search: Option<String>,
    pub limit: Option<u64>,
}

/// Strategy for listing catalog memes as JSON.
///
/// Results are ordered by popularity descending, then id ascending.
#[derive(Debug, Clone, Copy)]
pub struct MemesStrategy;

impl super::CommandStrategy for MemesStrategy {
    type Input = MemesInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let store = super::open_store(&config).await?;

        let filter = MemeFilter {
            category: input.category,
            search: input.search,
            limit: input.limit,
        };

        let memes = store.list(&filter).await?;
        println!("{}", serde_json::to_string_pretty(&memes)?);
        Ok(())
    }
}
