//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is a separate strategy type with its own input type,
//! dispatched statically from `main`. Strategies stay thin: they load the
//! config, open the catalog store, and call into the library crates.

use memedet_catalog::CatalogStore;
use memedet_config::Config;

mod detect;
mod init;
mod memes;
mod seed;
mod select;
mod show;
mod version;

pub use detect::{DetectInput, DetectStrategy};
pub use init::InitStrategy;
pub use memes::{MemesInput, MemesStrategy};
pub use seed::SeedStrategy;
pub use select::{SelectInput, SelectStrategy};
pub use show::{ShowInput, ShowStrategy};
pub use version::VersionStrategy;

/// Open the configured catalog store and make sure the schema exists.
async fn open_store(config: &Config) -> anyhow::Result<CatalogStore> {
    let store = CatalogStore::new(&config.database.url).await?;
    store.init_schema().await?;
    Ok(store)
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via an associated type,
/// enabling type-safe parameter passing without boxing. All calls are
/// monomorphized at compile time.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
