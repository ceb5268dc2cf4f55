use marquee_client::config::ClientConfig;
use marquee_client::fetch::fetch_catalog;
use marquee_client::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Headless demo: fetch the catalog once, run the full structural render,
/// and write the resulting document to stdout.
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(api = %config.api_base_url, "Fetching catalog");

    let catalog = fetch_catalog(&config.api_base_url).await;
    tracing::info!(count = catalog.len(), "Catalog ready");

    let runtime = Runtime::new(catalog);
    println!("{}", runtime.page().document);
}
