use anyhow::Result;

use crate::config::AppConfig;
use crate::ui::Output;
use quote_local::LocalQuoteStore;
use quote_types::{QuoteStore, StoreConfig};

pub async fn categories(force_local: bool, force_global: bool) -> Result<()> {
    let output = Output::new();

    // 自动初始化
    let _initialized = crate::service::init::ensure_initialized().await?;

    let config = AppConfig::load_with_scope(force_local, force_global)?;
    let store_path = config.get_store_path()?;

    let store_config = StoreConfig {
        path: store_path.to_string_lossy().to_string(),
        session_path: None,
    };
    let store = LocalQuoteStore::connect(&store_config).await?;

    let quotes = store.load().await?;
    output.store_info(&store_path, quotes.len());

    // 分类索引按需派生，不做持久化
    let names = quote_types::categories(&quotes);

    if names.is_empty() {
        output.info("No categories yet.");
        return Ok(());
    }

    for name in &names {
        println!("{}", name);
    }

    Ok(())
}
