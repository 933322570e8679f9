use std::path::Path;

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::ui::Output;
use quote_local::LocalQuoteStore;
use quote_types::{QuoteStore, StoreConfig};

pub async fn export(output_path: &Path, force_local: bool, force_global: bool) -> Result<()> {
    let output = Output::new();

    // 自动初始化
    let _initialized = crate::service::init::ensure_initialized().await?;

    let config = AppConfig::load_with_scope(force_local, force_global)?;

    let store_config = StoreConfig {
        path: config.get_store_path()?.to_string_lossy().to_string(),
        session_path: None,
    };
    let store = LocalQuoteStore::connect(&store_config).await?;

    let quotes = store.load().await?;

    let content = serde_json::to_string_pretty(&quotes).context("Failed to serialize quotes")?;
    std::fs::write(output_path, content)
        .with_context(|| format!("Failed to write export file: {}", output_path.display()))?;

    output.status(
        "Exported",
        &format!("{} quotes to {}", quotes.len(), output_path.display()),
    );

    Ok(())
}
