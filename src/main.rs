//! Pokedex-Crawler main entry point
//!
//! Command-line interface for the PokeAPI ingestion and enrichment pipeline.

use clap::Parser;
use pokedex_crawler::config::load_config_with_hash;
use pokedex_crawler::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pokedex-Crawler: a PokeAPI ingestion and enrichment pipeline
///
/// Fetches a bounded listing of creatures, enriches each with derived
/// type-effectiveness relations, evolution lineage, and localized
/// descriptions, and upserts the merged documents into a SQLite store.
#[derive(Parser, Debug)]
#[command(name = "pokedex-crawler")]
#[command(version = "1.0.0")]
#[command(about = "A PokeAPI ingestion and enrichment pipeline", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long, conflicts_with_all = ["stats", "export"])]
    dry_run: bool,

    /// Show statistics from the store and exit
    #[arg(long, conflicts_with_all = ["dry_run", "export"])]
    stats: bool,

    /// Dump all stored documents to a JSON file and exit
    #[arg(long, conflicts_with_all = ["dry_run", "stats"])]
    export: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config)?;
    } else if cli.export {
        handle_export(&config)?;
    } else {
        handle_crawl(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pokedex_crawler=info,warn"),
            1 => EnvFilter::new("pokedex_crawler=debug,info"),
            2 => EnvFilter::new("pokedex_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &pokedex_crawler::config::Config) {
    println!("=== Pokedex-Crawler Dry Run ===\n");

    println!("Source API:");
    println!("  Base URL: {}", config.api.base_url);
    println!("  Page limit: {}", config.api.page_limit);

    println!("\nLocalization:");
    println!("  Language: {}", config.localization.language);
    println!("  Version: {}", config.localization.version);

    println!("\nEnrichment:");
    println!("  Effectiveness: {:?}", config.enrichment.effectiveness);

    println!("\nOutput:");
    println!("  Database: {}", config.output.database_path);
    println!("  Export: {}", config.output.export_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would crawl up to {} entities from {}",
        config.api.page_limit, config.api.base_url
    );
}

/// Handles the --stats mode: shows statistics from the store
fn handle_stats(config: &pokedex_crawler::config::Config) -> anyhow::Result<()> {
    use pokedex_crawler::output::{load_statistics, print_statistics};
    use pokedex_crawler::storage::SqliteStore;
    use std::path::Path;

    println!("Database: {}\n", config.output.database_path);

    let store = SqliteStore::open(Path::new(&config.output.database_path))?;
    let stats = load_statistics(&store)?;
    print_statistics(&stats);

    Ok(())
}

/// Handles the --export mode: dumps stored documents to a JSON file
fn handle_export(config: &pokedex_crawler::config::Config) -> anyhow::Result<()> {
    use pokedex_crawler::output::export_documents;
    use pokedex_crawler::storage::SqliteStore;
    use std::path::Path;

    println!("=== Exporting Stored Documents ===\n");
    println!("Database: {}", config.output.database_path);
    println!("Output: {}", config.output.export_path);
    println!();

    let store = SqliteStore::open(Path::new(&config.output.database_path))?;
    let written = export_documents(&store, Path::new(&config.output.export_path))?;

    println!(
        "✓ Exported {} documents to: {}",
        written, config.output.export_path
    );

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: pokedex_crawler::config::Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting crawl: up to {} entities from {}",
        config.api.page_limit,
        config.api.base_url
    );

    match crawl(config).await {
        Ok(()) => {
            tracing::info!("Crawl completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
