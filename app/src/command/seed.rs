use memedet_catalog::seed_catalog;
use memedet_config::Config;

/// Strategy for seeding the catalog with the sample meme corpus.
///
/// Idempotent: existing sample records are replaced, never duplicated.
#[derive(Debug, Clone, Copy)]
pub struct SeedStrategy;

impl super::CommandStrategy for SeedStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let store = super::open_store(&config).await?;

        let count = seed_catalog(&store).await?;
        println!("Seeded {count} memes");
        Ok(())
    }
}
