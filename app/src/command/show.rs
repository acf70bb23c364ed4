use memedet_config::Config;
use memedet_core::MemeRepo;

/// Input for the show command.
pub struct ShowInput {
    pub id: String,
}

/// Strategy for showing a single meme and its video source.
#[derive(Debug, Clone, Copy)]
pub struct ShowStrategy;

impl super::CommandStrategy for ShowStrategy {
    type Input = ShowInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let store = super::open_store(&config).await?;

        let Some(meme) = store.find_by_id(&input.id).await? else {
            anyhow::bail!("Meme with id '{}' not found", input.id);
        };

        println!("{}", serde_json::to_string_pretty(&meme)?);

        if let Some(source) = store.video_source(&input.id).await? {
            println!("{}", serde_json::to_string_pretty(&source)?);
        }

        Ok(())
    }
}
