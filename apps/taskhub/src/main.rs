//! TaskHub command-line front end
//!
//! Seeds an in-memory store, restores the saved session and runs one
//! command against them.

use auth::{Authenticator, FileSessionStorage};
use clap::Parser;
use entity_store::{Dataset, EntityStore, MemoryEntityStore, SequentialIdGenerator};
use tracing::{debug, info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;

use cli::Cli;
use config::{IdStrategy, TaskHubConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = TaskHubConfig::load()?;

    // Initialize tracing
    let log_level = match config.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("taskhub={0},entity_store={0},auth={0}", log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting TaskHub");

    // Seed the store
    let dataset = match &config.dataset_path {
        Some(path) => Dataset::load(path)?,
        None => Dataset::demo(),
    };
    let store = match config.id_strategy {
        IdStrategy::Uuid => MemoryEntityStore::from_dataset(dataset),
        IdStrategy::Sequential => {
            MemoryEntityStore::from_dataset(dataset).with_id_generator(SequentialIdGenerator::new())
        }
    };
    debug!(
        users = store.users().len(),
        projects = store.projects().len(),
        "Store seeded"
    );

    // Restore the session
    let session_path = config
        .session_path
        .clone()
        .or_else(FileSessionStorage::default_path)
        .ok_or("No session path configured and no platform data directory found")?;
    let mut auth = Authenticator::new(FileSessionStorage::new(session_path))?;

    cli.command.run(&store, &mut auth, &mut std::io::stdout().lock())?;
    Ok(())
}
