use memedet_config::Config;
use memedet_core::UserSelectionRepo;

/// Input for the select command.
pub struct SelectInput {
    pub user: String,
    pub meme_ids: Vec<String>,
    /// Optional client settings as a JSON object string.
    pub settings: Option<String>,
}

/// Strategy for saving a user's meme selection.
///
/// One selection row per user; repeated runs replace the stored ids and
/// refresh the `updated_at` timestamp.
#[derive(Debug, Clone, Copy)]
pub struct SelectStrategy;

impl super::CommandStrategy for SelectStrategy {
    type Input = SelectInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let store = super::open_store(&config).await?;

        let settings = input
            .settings
            .map(|raw| serde_json::from_str(&raw))
            .transpose()?;

        let selection = store.upsert(&input.user, &input.meme_ids, settings).await?;
        println!("{}", serde_json::to_string_pretty(&selection)?);
        Ok(())
    }
}
