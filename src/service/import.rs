use std::path::Path;

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::ui::Output;
use quote_local::LocalQuoteStore;
use quote_types::{Quote, QuoteStore, StoreConfig};

/// 解析导入文件内容：必须是 {text, category} 记录的 JSON 数组
///
/// 除了能解析为结构化数据之外不做其他校验，记录会被无条件追加
pub fn parse_quotes(content: &str) -> Result<Vec<Quote>> {
    serde_json::from_str(content).context("Import file is not a valid JSON array of quotes")
}

pub async fn import(file: &Path, force_local: bool, force_global: bool) -> Result<()> {
    let output = Output::new();

    // 自动初始化
    let _initialized = crate::service::init::ensure_initialized().await?;

    let config = AppConfig::load_with_scope(force_local, force_global)?;
    let scope = AppConfig::get_scope_name(force_local, force_global);

    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read import file: {}", file.display()))?;

    // 解析失败不产生任何变更
    let quotes = parse_quotes(&content)?;
    let imported = quotes.len();

    let store_config = StoreConfig {
        path: config.get_store_path()?.to_string_lossy().to_string(),
        session_path: None,
    };
    let store = LocalQuoteStore::connect(&store_config).await?;

    store.append_batch(quotes).await?;

    output.status(
        "Imported",
        &format!("{} quotes from {}", imported, file.display()),
    );
    output.finish("import", scope);

    Ok(())
}
