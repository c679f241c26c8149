mod api;
mod logging;

use clap::{Parser, Subcommand};
use mockdesk_core::config::{self, BackendKind};
use mockdesk_store::{SeedData, StorageKey, Store};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "mockdesk",
    version,
    about = "Mock REST backend for the admin dashboard"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml", env = "MOCKDESK_CONFIG")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    Serve,
    /// Apply a seed document (JSON) to the configured store.
    Seed {
        /// Path to the seed file.
        file: String,
    },
    /// Remove every key from the configured store.
    Reset,
    /// Print one collection as JSON.
    Dump {
        /// tasks, users, apps, chats, dashboard-stats or auth.
        collection: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;
    let _log_guard = logging::init(&cfg.mockdesk)?;

    match cli.command {
        Commands::Serve => {
            let store = Store::from_config(&cfg.storage).await?;
            if let Some(path) = cfg.storage.seed_path() {
                store.seed(SeedData::from_file(&path)?).await?;
                info!("applied seed file {path}");
            }
            info!("{} starting", cfg.mockdesk.name);
            api::serve(cfg.api, store).await?;
        }
        Commands::Seed { file } => {
            warn_if_ephemeral(&cfg.storage.backend_kind()?);
            let data = SeedData::from_file(&file)?;
            let store = Store::from_config(&cfg.storage).await?;
            store.seed(data).await?;
            println!("Seeded {} store from {file}", store.backend_name());
        }
        Commands::Reset => {
            warn_if_ephemeral(&cfg.storage.backend_kind()?);
            let store = Store::from_config(&cfg.storage).await?;
            store.reset().await?;
            println!("Reset {} store", store.backend_name());
        }
        Commands::Dump { collection } => {
            let Some(key) = StorageKey::parse(&collection) else {
                anyhow::bail!(
                    "unknown collection '{collection}'. Expected one of: {}",
                    StorageKey::ALL
                        .iter()
                        .map(|k| k.short_name())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            };
            let store = Store::from_config(&cfg.storage).await?;
            match store.dump(key).await? {
                Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                None => println!("null"),
            }
        }
    }

    Ok(())
}

/// The memory backend dies with the process, so CLI writes to it are lost.
fn warn_if_ephemeral(kind: &BackendKind) {
    if *kind == BackendKind::Memory {
        warn!("storage backend is 'memory'; changes will not outlive this command");
    }
}
