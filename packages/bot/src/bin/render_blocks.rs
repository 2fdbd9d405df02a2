//! CLI for previewing block payloads
//!
//! Prints the JSON the bot would send, so layouts can be pasted into the
//! platform's block preview tool.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bot_core::config::Config;
use bot_core::domains::home::home_view;
use bot_core::domains::listings::{
    buyer_listing_blocks, listing_block, owner_listing_blocks, ListingDoc,
};
use bot_core::domains::onboarding::{permission_request, sell_prompt};
use bot_core::domains::settings::settings_block;
use bot_core::kernel::{BotDeps, InMemoryDocumentStore, Snapshot};

#[derive(Parser)]
#[command(name = "render_blocks")]
#[command(about = "Render marketplace bot block payloads as JSON")]
struct Cli {
    /// Pretty-print the output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a listing document (path to JSON, or - for stdin)
    Listing {
        file: PathBuf,
        /// Include the seller's buttons
        #[arg(long, conflicts_with = "buyer")]
        owner: bool,
        /// Include the buyer's buttons
        #[arg(long)]
        buyer: bool,
    },

    /// Render the "sell this item" prompt for an image
    SellPrompt { image_url: String },

    /// Render the file access permission prompt
    Permission { url: String },

    /// Render the settings panel for a user
    Settings {
        user_id: String,
        /// Store snapshot: {"<collection>": {"<id>": {...}}}
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Render the full home tab view for a user
    Home {
        user_id: String,
        #[arg(long)]
        store: Option<PathBuf>,
        /// JSON array of the user's listing documents
        #[arg(long)]
        listings: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pipeable JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bot_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Listing { file, owner, buyer } => {
            let doc: ListingDoc = read_json(&file)?;
            let blocks = if owner {
                owner_listing_blocks(&doc)
            } else if buyer {
                buyer_listing_blocks(&doc)
            } else {
                listing_block(&doc.data, Vec::new())
            };
            output(&blocks, cli.pretty)
        }
        Commands::SellPrompt { image_url } => output(&sell_prompt(&image_url), cli.pretty),
        Commands::Permission { url } => {
            output(&permission_request(&url, &config.app_name), cli.pretty)
        }
        Commands::Settings { user_id, store } => {
            let deps = build_deps(store.as_deref(), config)?;
            let blocks = settings_block(&deps, &user_id)
                .await
                .context("Failed to build settings blocks")?;
            output(&blocks, cli.pretty)
        }
        Commands::Home {
            user_id,
            store,
            listings,
        } => {
            let deps = build_deps(store.as_deref(), config)?;
            let listings: Vec<ListingDoc> = match listings {
                Some(path) => read_json(&path)?,
                None => Vec::new(),
            };
            let view = home_view(&deps, &user_id, &listings)
                .await
                .context("Failed to build home view")?;
            output(&view, cli.pretty)
        }
    }
}

fn build_deps(snapshot: Option<&Path>, config: Config) -> Result<BotDeps> {
    let store = match snapshot {
        Some(path) => {
            let snapshot: Snapshot = read_json(path)?;
            InMemoryDocumentStore::from_snapshot(snapshot)
        }
        None => InMemoryDocumentStore::new(),
    };
    tracing::info!(documents = store.len(), "Document store loaded");
    Ok(BotDeps::new(Arc::new(store), config))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn output<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
