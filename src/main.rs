use anyhow::Result;
use portfolio::{check_content, config::Config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting portfolio server");

    let config = Config::from_env()?;
    check_content()?;

    server::serve(&config).await
}
