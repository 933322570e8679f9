use anyhow::Result;
use rand::seq::SliceRandom;

use crate::config::AppConfig;
use crate::ui::Output;
use quote_local::LocalQuoteStore;
use quote_types::{filter_by_category, QuoteStore, StoreConfig, ALL_CATEGORIES};

pub async fn show(
    category: Option<&str>,
    last: bool,
    force_local: bool,
    force_global: bool,
) -> Result<()> {
    let output = Output::new();

    // 自动初始化
    let _initialized = crate::service::init::ensure_initialized().await?;

    let config = AppConfig::load_with_scope(force_local, force_global)?;
    let store_config = StoreConfig {
        path: config.get_store_path()?.to_string_lossy().to_string(),
        session_path: None,
    };
    let store = LocalQuoteStore::connect(&store_config).await?;

    // 会话内最近展示过的引语
    if last {
        match store.last_quote().await? {
            Some(quote) => output.quote(&quote),
            None => output.info("No quote displayed yet in this session."),
        }
        return Ok(());
    }

    let quotes = store.load().await?;
    let selection = category.unwrap_or(ALL_CATEGORIES);
    let candidates = filter_by_category(&quotes, selection);

    let Some(quote) = candidates.choose(&mut rand::thread_rng()).copied() else {
        output.info("No quotes available. Please add some!");
        return Ok(());
    };

    store.set_last_quote(quote).await?;
    output.quote(quote);

    Ok(())
}
