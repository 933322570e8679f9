use anyhow::Result;

use crate::config::AppConfig;
use crate::ui::Output;
use quote_local::LocalQuoteStore;
use quote_types::{Quote, QuoteStore, StoreConfig};

pub async fn add(text: &str, category: &str, force_local: bool, force_global: bool) -> Result<()> {
    let output = Output::new();

    // 自动初始化
    let _initialized = crate::service::init::ensure_initialized().await?;

    let config = AppConfig::load_with_scope(force_local, force_global)?;
    let store_path = config.get_store_path()?;

    // 校验在触达存储之前完成，失败时集合保持不变
    let quote = Quote::new(text, category)?;

    let store_config = StoreConfig {
        path: store_path.to_string_lossy().to_string(),
        session_path: None,
    };
    let store = LocalQuoteStore::connect(&store_config).await?;

    store.append(quote.clone()).await?;
    let count = store.count().await?;

    output.status(
        "Added",
        &format!("\"{}\" to {} ({} quotes)", quote.text, quote.category, count),
    );

    Ok(())
}
