use anyhow::Result;

use crate::config::AppConfig;
use crate::ui::Output;
use quote_local::LocalQuoteStore;
use quote_types::{default_quotes, QuoteStore, StoreConfig};

/// 显式初始化（带用户反馈）
/// local: true 表示在本地目录初始化，false 表示在全局目录初始化
pub async fn initialize(local: bool) -> Result<()> {
    let output = Output::new();
    let config_dir = AppConfig::get_quote_dir(local);
    let config_path = config_dir.join("config.toml");
    let location = AppConfig::get_scope_name(local, false);

    // 创建配置目录
    std::fs::create_dir_all(&config_dir)?;

    // 如果配置文件已存在，提示用户
    if config_path.exists() {
        output.resource_action("Found", "config", &config_path);
    } else {
        let mut config = AppConfig::default();

        // 如果是本地初始化，设置本地存储路径
        if local {
            config.store_path = Some(AppConfig::local_quote_dir());
        }

        config.save_to(&config_dir)?;
        output.resource_action("Creating", "config", &config_path);
    }

    // 加载配置并确保目录存在
    let config = if local {
        let mut config = AppConfig::load()?;
        config.store_path = Some(AppConfig::local_quote_dir());
        config
    } else {
        AppConfig::load()?
    };

    config.ensure_dirs()?;

    // 确保集合已持久化（首次初始化落盘默认引语）
    let store_config = StoreConfig {
        path: config.get_store_path()?.to_string_lossy().to_string(),
        session_path: None,
    };
    let store = LocalQuoteStore::connect(&store_config).await?;
    let quotes_path = config.get_store_path()?.join("quotes.json");

    if !store.exists().await? {
        store.replace_all(default_quotes()).await?;
        output.resource_action("Creating", "collection", &quotes_path);
    } else {
        output.resource_action("Found", "collection", &quotes_path);
    }

    output.finish("initialization", location);

    Ok(())
}

/// 自动初始化
/// 确保配置文件和默认集合存在
/// 返回是否进行了初始化
pub async fn ensure_initialized() -> Result<bool> {
    let output = Output::new();
    let config = AppConfig::load()?;
    let mut initialized = false;

    // 如果全局配置文件不存在，保存默认配置
    let global_config_path = AppConfig::global_quote_dir().join("config.toml");
    if !global_config_path.exists() {
        config.ensure_dirs()?;
        AppConfig::default().save_to(&AppConfig::global_quote_dir())?;
        output.resource_action("Creating", "config", &global_config_path);
        initialized = true;
    } else {
        config.ensure_dirs()?;
    }

    // 确保集合已持久化
    let store_config = StoreConfig {
        path: config.get_store_path()?.to_string_lossy().to_string(),
        session_path: None,
    };
    let store = LocalQuoteStore::connect(&store_config).await?;

    if !store.exists().await? {
        store.replace_all(default_quotes()).await?;
        initialized = true;
    }

    Ok(initialized)
}
