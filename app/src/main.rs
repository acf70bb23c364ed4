#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    CommandStrategy, DetectInput, DetectStrategy, InitStrategy, MemesInput, MemesStrategy,
    SeedStrategy, SelectInput, SelectStrategy, ShowInput, ShowStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "memedet")]
#[command(about = "Meme detection backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match text content against the meme catalog
    Detect {
        /// Text content to analyze
        #[arg(short, long)]
        content: Option<String>,

        /// Read content from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Image URLs (accepted, not analyzed)
        #[arg(long = "image-url")]
        image_urls: Vec<String>,
    },
    /// List catalog memes
    Memes {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Search in name or description
        #[arg(short, long)]
        search: Option<String>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<u64>,
    },
    /// Show a single meme and its video source
    Show {
        /// Meme id
        id: String,
    },
    /// Save a user's meme selection
    Select {
        /// User id
        #[arg(short, long)]
        user: String,

        /// Selected meme ids
        #[arg(short, long = "meme")]
        meme_ids: Vec<String>,

        /// Client settings as a JSON object
        #[arg(long)]
        settings: Option<String>,
    },
    /// Seed the catalog with the sample corpus
    Seed,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect {
            content,
            file,
            image_urls,
        } => {
            DetectStrategy
                .execute(DetectInput {
                    content,
                    file,
                    image_urls,
                })
                .await
        }
        Commands::Memes {
            category,
            search,
            limit,
        } => {
            MemesStrategy
                .execute(MemesInput {
                    category,
                    search,
                    limit,
                })
                .await
        }
        Commands::Show { id } => ShowStrategy.execute(ShowInput { id }).await,
        Commands::Select {
            user,
            meme_ids,
            settings,
        } => {
            SelectStrategy
                .execute(SelectInput {
                    user,
                    meme_ids,
                    settings,
                })
                .await
        }
        Commands::Seed => SeedStrategy.execute(()).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
