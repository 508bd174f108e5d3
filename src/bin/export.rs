//! Export binary - renders the page in both languages to static HTML files
//!
//! Usage:
//!   cargo run --bin export               # Writes into $EXPORT_DIR (defaults to dist)
//!   cargo run --bin export -- public     # Writes into ./public
//!
//! Output:
//! - index.html (Portuguese, primary)
//! - en.html    (English)

use anyhow::Result;
use portfolio::{check_content, config::Config, export::export_site};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.export_dir));

    check_content()?;

    let written = export_site(&dir)?;
    info!("Exported {} pages to {}", written.len(), dir.display());

    Ok(())
}
