//! Imagery admin binary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use imagery_core::config::AppConfig;
use imagery_pipeline::{
    ImageLibrary, ItemDirectory, MigrationPlan, Resolution, SourceUrl, StaticItemDirectory,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Imagery - image acquisition and storage
#[derive(Parser, Debug)]
#[command(name = "imagery")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "IMAGERY_CONFIG",
        default_value = "config/imagery.toml"
    )]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pull the item schema and community catalog into the URL table
    Sync,
    /// Download an image and store it under a key
    Add {
        name: String,
        url: String,
        #[arg(long, default_value_t = 0)]
        variant: u64,
    },
    /// Print the stored reference for a key
    Get {
        name: String,
        #[arg(long, default_value_t = 0)]
        variant: u64,
    },
    /// Store a player's avatar
    Avatar { user_id: String },
    /// Print table sizes and queue state
    Status,
    /// Wipe the identifier table and download every image again
    Refresh {
        /// Confirm the wipe
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Imagery v{}", env!("CARGO_PKG_VERSION"));

    // File is optional; IMAGERY_ variables override it.
    let mut figment = Figment::new();
    if std::path::Path::new(&args.config).exists() {
        tracing::info!(config_path = %args.config, "Loading configuration from file");
        figment = figment.merge(Toml::file(&args.config));
    } else {
        tracing::debug!("No config file found at {}", args.config);
    }

    let config: AppConfig = figment
        .merge(Env::prefixed("IMAGERY_").split("__"))
        .extract()
        .context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    if let Command::Refresh { yes: false } = args.command {
        println!(
            "This wipes the identifier table and downloads every registered image again.\n\
             Re-run with --yes to continue."
        );
        return Ok(());
    }

    let storage = imagery_storage::from_config(&config.storage)
        .await
        .context("failed to initialize storage")?;
    storage
        .health_check()
        .await
        .context("storage health check failed")?;
    tracing::info!(backend = storage.backend_name(), "Storage backend initialized");

    // The process exits once idle, so syncs run in the foreground instead.
    let sync_enabled = config.sync.enabled;
    let mut library_config = config.clone();
    library_config.sync.enabled = false;

    let mut builder = ImageLibrary::builder(library_config, storage);
    if let Some(path) = &config.sync.items_file {
        let items = StaticItemDirectory::from_json_file(path)
            .await
            .with_context(|| format!("failed to load item definitions: {}", path.display()))?;
        builder = builder.items(Arc::new(items) as Arc<dyn ItemDirectory>);
    }
    let library = builder.build().await;
    let plan = library.start().await;
    tracing::debug!(?plan, "Library started");
    let sync = runs_sync(&args.command, plan, sync_enabled);

    match args.command {
        Command::Sync | Command::Status => {}
        Command::Add { name, url, variant } => {
            library.add_image(&url, &name, variant).await;
        }
        Command::Get { name, variant } => {
            match library.resolve(&name, variant).await {
                Resolution::Ready(content) => println!("{}", content.as_str()),
                Resolution::Loading => println!("loading"),
                Resolution::Missing => println!("missing"),
            }
            if let SourceUrl::Url(url) = library.get_source_url(&name, variant).await {
                println!("source: {url}");
            }
        }
        Command::Avatar { user_id } => {
            if !library.fetch_player_avatar(&user_id).await {
                println!("no avatar queued for {user_id}");
            }
        }
        Command::Refresh { .. } => library.refresh_imagery().await,
    }

    if sync {
        let report = library.sync_remote_catalog().await;
        println!(
            "schema entries: {}, community entries: {}, completed: {}",
            report.schema_entries, report.community_entries, report.completed
        );
    }

    library.wait_idle().await;

    let status = library.status().await;
    println!(
        "backend: {} namespace: {} (live {}) identifiers: {} urls: {} metadata: {}",
        status.backend,
        status.namespace,
        status.live_namespace,
        status.identifiers,
        status.urls,
        status.metadata
    );

    library.shutdown().await;
    Ok(())
}

/// Whether this run syncs the remote catalog. At most one sync per run:
/// always for `sync`, otherwise after a fresh start or a refresh when
/// syncing is enabled.
fn runs_sync(command: &Command, plan: MigrationPlan, enabled: bool) -> bool {
    match command {
        Command::Sync => true,
        Command::Refresh { .. } => enabled,
        _ => enabled && plan == MigrationPlan::FreshInit,
    }
}
