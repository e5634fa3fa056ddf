use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use vetstore_storefront::StorefrontClient;

#[derive(Debug, Parser)]
#[command(name = "vetstore-cli")]
#[command(about = "Print the storefront catalog with discount pricing as JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve the discount policy (falls back to the built-in policy).
    Settings,
    /// List collection handles.
    Collections,
    /// Fetch products with discount pricing applied.
    Products {
        /// Restrict to one collection handle.
        #[arg(long)]
        collection: Option<String>,
    },
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = vetstore_core::load_store_config()?;
    init_tracing(&config.log_level);
    tracing::debug!(?config, "loaded store config");

    let client = StorefrontClient::from_config(&config)?;

    match cli.command {
        Commands::Settings => print_json(&client.discount_settings().await)?,
        Commands::Collections => print_json(&client.collections().await)?,
        Commands::Products { collection } => {
            let products = client.products_by_collection(collection.as_deref()).await;
            tracing::info!(count = products.len(), "fetched products");
            print_json(&products)?;
        }
    }

    Ok(())
}
