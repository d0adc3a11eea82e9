//! Fragmenter CLI
//!
//! Local execution entry point. For AWS Lambda, use `fragmenter-refresh`
//! and `fragmenter-mock`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fragmenter::{
    config::PipelineConfig,
    error::Result,
    mock,
    pipeline::run_refresh,
    services::HttpReviewSource,
    storage::LocalStore,
};

/// Fragmenter - Product Review Fragment Renderer
#[derive(Parser, Debug)]
#[command(
    name = "fragmenter",
    version,
    about = "Renders product review fragments for edge-side composition"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch, render, and store fragments for all configured products
    Refresh {
        /// Directory to store rendered fragments in
        #[arg(short, long, default_value = "storage")]
        out_dir: PathBuf,

        /// Products to refresh (default: PRODUCT_IDS environment variable)
        #[arg(long, value_delimiter = ',')]
        products: Option<Vec<String>>,
    },

    /// Route a request path through the mock reviews API and print the response
    Mock {
        /// Request path, e.g. /products/product-a/reviews
        path: String,
    },

    /// Validate the environment-derived configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Refresh { out_dir, products } => {
            let mut config = PipelineConfig::from_env();
            if let Some(products) = products {
                config.product_ids = products;
            }
            config.validate()?;

            log::info!(
                "Refreshing {} products from {}",
                config.product_ids.len(),
                config.api_base_url
            );

            let source = HttpReviewSource::new(&config)?;
            let store = LocalStore::new(&out_dir);
            let outcome = run_refresh(&source, &store, &config.product_ids).await?;

            log::info!(
                "Stored {} fragments under {}",
                outcome.count,
                out_dir.display()
            );
        }

        Command::Mock { path } => {
            let response = mock::route(&path);
            println!("HTTP {}", response.status);
            println!("Content-Type: {}", response.content_type);
            println!("{}", response.body);
        }

        Command::Validate => {
            let config = PipelineConfig::from_env();
            config.validate()?;
            log::info!("Configuration OK:");
            log::info!("  upstream: {}", config.api_base_url);
            log::info!("  products: {}", config.product_ids.join(", "));
            log::info!("  bucket:   {}", config.bucket);
        }
    }

    Ok(())
}
