use anyhow::Result;

use crate::config::AppConfig;
use crate::ui::Output;
use quote_local::LocalQuoteStore;
use quote_types::{filter_by_category, QuoteStore, StoreConfig, ALL_CATEGORIES};

pub async fn list(category: Option<&str>, force_local: bool, force_global: bool) -> Result<()> {
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

    // 显式指定的过滤器会被记住；未指定时恢复上次的选择
    let selection = match category {
        Some(selected) => {
            store.set_last_category(selected).await?;
            selected.to_string()
        }
        None => store
            .last_category()
            .await?
            .unwrap_or_else(|| ALL_CATEGORIES.to_string()),
    };

    let quotes = store.load().await?;
    output.store_info(&store_path, quotes.len());

    if selection != ALL_CATEGORIES {
        output.note(&format!("Filtering by category: {}", selection));
    }

    let filtered = filter_by_category(&quotes, &selection);

    if filtered.is_empty() {
        output.info("No quotes found. Use 'quote add' to add some!");
        return Ok(());
    }

    output.quote_list(&filtered);

    Ok(())
}
