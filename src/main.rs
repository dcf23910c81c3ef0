//! Product Finder entry point.
//!
//! Initializes tracing, loads configuration from the environment, performs
//! the initial catalog load, and hands control to the interactive menu.

use std::io::{self, BufRead, Write};

use product_finder::catalog::ProductCatalog;
use product_finder::console;
use product_finder::infrastructure::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,product_finder=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Product Finder...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    writeln!(output, "===== PRODUCT FINDER =====")?;
    writeln!(output, "Search and list retail catalog products")?;

    let raw_path = match config.catalog_file.as_deref() {
        Some(path) => path.display().to_string(),
        None => {
            write!(output, "\nEnter the path of the catalog CSV file: ")?;
            output.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            line.trim().to_string()
        }
    };

    let mut catalog = ProductCatalog::new();

    writeln!(output, "Loading products...")?;
    match console::load_catalog(&mut catalog, &raw_path) {
        Ok(count) => {
            writeln!(output, "Loaded {count} products into the catalog.")?;
            console::run(&mut catalog, &config, &mut input, &mut output)?;
        }
        Err(error) => {
            tracing::error!("Initial catalog load failed: {error}");
            writeln!(output, "Failed to load the file: {error}")?;
            writeln!(output, "Check that the file exists and has the expected format.")?;
        }
    }

    writeln!(output, "\nThanks for using Product Finder!")?;
    tracing::info!("Product Finder stopped");

    Ok(())
}
