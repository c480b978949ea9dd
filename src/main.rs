use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_card::{
    cache::{DurableCache, FileStore, InMemoryStore, KeyValueStore},
    card::CardRenderer,
    catalog::HttpCatalogClient,
    config::Config,
    resolver::Resolver,
    session::{LookupSession, SessionOutput},
};

#[derive(Parser)]
#[command(name = "pokedex-card")]
#[command(version)]
#[command(about = "Look up Pokémon by name or id and render them as cards")]
#[command(long_about = None)]
struct Cli {
    /// Names or ids to look up; omit for an interactive prompt
    queries: Vec<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "pokedex.toml")]
    config: PathBuf,

    /// Write the default configuration to the config path and exit
    #[arg(long)]
    init_config: bool,

    /// Catalog base URL (overrides config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Durable cache directory (overrides config file)
    #[arg(long, value_name = "DIR")]
    cache_dir: Option<PathBuf>,

    /// Keep fetched records in memory only
    #[arg(long)]
    no_persist: bool,

    /// Log level
    #[arg(short = 'v', long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only cards and messages
    let log_filter = format!("pokedex_card={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if cli.init_config {
        Config::write_default(&cli.config)?;
        println!("Wrote default configuration to {}", cli.config.display());
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = Config::load_from_file(&cli.config)?;

    // Override config with CLI arguments
    if let Some(api_url) = cli.api_url {
        config.catalog.base_url = api_url;
    }
    if let Some(cache_dir) = cli.cache_dir {
        config.storage.cache_dir = cache_dir;
    }
    if cli.no_persist {
        config.storage.persist = false;
    }
    config.validate()?;

    info!("Starting pokedex-card v{}", env!("CARGO_PKG_VERSION"));
    info!("Using catalog: {}", config.catalog.base_url);

    let store: Arc<dyn KeyValueStore> = if config.storage.persist {
        info!("Durable cache directory: {}", config.storage.cache_dir.display());
        Arc::new(FileStore::new(config.storage.cache_dir.clone()))
    } else {
        info!("Persistence disabled, caching in memory only");
        Arc::new(InMemoryStore::new())
    };
    let durable = DurableCache::new(store, config.storage.slot.clone());
    let catalog = Arc::new(HttpCatalogClient::new(&config.catalog)?);
    let resolver = Resolver::bootstrap(durable, catalog).await;
    let renderer = CardRenderer::new(config.display.clone());

    if cli.queries.is_empty() {
        run_interactive(LookupSession::new(resolver, renderer)).await?;
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(run_queries(&resolver, &renderer, &cli.queries).await)
    }
}

/// Resolve each query once and print both card faces
async fn run_queries(resolver: &Resolver, renderer: &CardRenderer, queries: &[String]) -> ExitCode {
    let mut failed = false;
    for query in queries {
        match resolver.resolve(query).await {
            Ok(resolution) => {
                println!("{}\n", renderer.render_front(&resolution.record));
                println!("{}\n", renderer.render_back(&resolution.record));
            }
            Err(e) => {
                failed = true;
                println!("{query}: {}\n", e.user_message());
            }
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

async fn run_interactive(mut session: LookupSession) -> Result<()> {
    println!("Enter a Pokémon name or ID (:flip to turn the card, :quit to exit)");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match session.handle_line(&line).await {
            SessionOutput::Card(card) => println!("{card}\n"),
            SessionOutput::Message(message) => println!("{message}"),
            SessionOutput::Exit => break,
        }
    }

    Ok(())
}
