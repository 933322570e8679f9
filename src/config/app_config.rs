use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 配置作用域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    Auto,
    Local,
    Global,
}

/// 同步服务器配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 同步端点：GET 拉取远端列表，POST 推送单条引语
    #[serde(default = "default_server_url")]
    pub url: String,

    /// 请求超时（秒，默认: 10）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// watch 模式同步间隔（秒，默认: 30）
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            timeout_secs: default_timeout_secs(),
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_server_url() -> String {
    "https://jsonplaceholder.typicode.com/posts".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_interval_secs() -> u64 {
    30
}

/// 应用配置
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 存储目录（可选，默认: ~/.quote 或 ./.quote）
    pub store_path: Option<PathBuf>,

    /// 同步服务器配置
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// 全局 .quote 目录：~/.quote/
    pub fn global_quote_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".quote")
    }

    /// 本地 .quote 目录：./.quote/
    pub fn local_quote_dir() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".quote")
    }

    /// 检查本地配置是否存在
    /// 注意：如果当前目录是用户主目录，则不认为是本地配置
    pub fn has_local_config() -> bool {
        let current_dir = match std::env::current_dir() {
            Ok(dir) => dir,
            Err(_) => return false,
        };

        let global_parent = Self::global_quote_dir().parent().map(|p| p.to_path_buf());

        if let Some(home) = global_parent {
            let current_canonical = current_dir.canonicalize().unwrap_or(current_dir.clone());
            let home_canonical = home.canonicalize().unwrap_or(home);

            if current_canonical == home_canonical {
                return false;
            }
        }

        Self::local_quote_dir().join("config.toml").exists()
    }

    /// 验证作用域标志（不能同时指定 local 和 global）
    pub fn validate_scope_flags(local: bool, global: bool) -> Result<()> {
        if local && global {
            anyhow::bail!("Cannot specify both --local and --global, please choose one");
        }
        Ok(())
    }

    /// 获取当前作用域名称
    /// 返回 "local" 或 "global"
    pub fn get_scope_name(force_local: bool, force_global: bool) -> &'static str {
        if force_local {
            "local"
        } else if force_global {
            "global"
        } else if Self::has_local_config() {
            "local"
        } else {
            "global"
        }
    }

    /// 根据 local 标志获取配置目录
    pub fn get_quote_dir(local: bool) -> PathBuf {
        if local {
            Self::local_quote_dir()
        } else {
            Self::global_quote_dir()
        }
    }

    /// 加载配置：根据 local/global 标志或优先级加载
    /// - local = true: 强制使用本地配置
    /// - global = true: 强制使用全局配置
    /// - 两者都为 false: 优先本地配置，其次全局配置
    pub fn load_with_scope(force_local: bool, force_global: bool) -> Result<Self> {
        Self::validate_scope_flags(force_local, force_global)?;

        let scope = if force_local {
            ConfigScope::Local
        } else if force_global {
            ConfigScope::Global
        } else {
            ConfigScope::Auto
        };

        Self::load_with_scope_internal(scope)
    }

    /// 加载配置：优先本地配置，其次全局配置
    pub fn load() -> Result<Self> {
        Self::load_with_scope_internal(ConfigScope::Auto)
    }

    /// 内部加载逻辑
    fn load_with_scope_internal(scope: ConfigScope) -> Result<Self> {
        match scope {
            ConfigScope::Auto => {
                // 优先本地配置
                if Self::has_local_config() {
                    Self::load_from_path(&Self::local_quote_dir().join("config.toml"), true)
                } else {
                    Self::load_from_path(&Self::global_quote_dir().join("config.toml"), false)
                }
            }
            ConfigScope::Local => {
                Self::load_from_path(&Self::local_quote_dir().join("config.toml"), true)
            }
            ConfigScope::Global => {
                Self::load_from_path(&Self::global_quote_dir().join("config.toml"), false)
            }
        }
    }

    /// 从指定路径加载配置文件
    ///
    /// 配置文件缺失时回退到默认配置（所有字段都有默认值）
    fn load_from_path(path: &PathBuf, is_local: bool) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;

            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Self::default()
        };

        // 本地配置强制使用本地存储路径
        if is_local {
            config.store_path = Some(Self::local_quote_dir());
        }

        tracing::debug!("Sync server: {}", config.server.url);

        Ok(config)
    }

    /// 获取存储目录
    pub fn get_store_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.store_path {
            Ok(path.clone())
        } else {
            Ok(Self::global_quote_dir())
        }
    }

    /// 确保存储目录存在
    pub fn ensure_dirs(&self) -> Result<()> {
        let store_path = self.get_store_path()?;
        std::fs::create_dir_all(&store_path).with_context(|| {
            format!(
                "Failed to create store directory: {}",
                store_path.display()
            )
        })?;
        Ok(())
    }

    /// 保存配置到指定目录
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let config_path = dir.join("config.toml");
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_app_config() {
        let toml_str = r#"
[server]
url = "http://localhost:9000/posts"
timeout_secs = 5
interval_secs = 60
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.server.url, "http://localhost:9000/posts");
        assert_eq!(config.server.timeout_secs, 5);
        assert_eq!(config.server.interval_secs, 60);
        assert_eq!(config.store_path, None);
    }

    #[test]
    fn test_default_values() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(
            config.server.url,
            "https://jsonplaceholder.typicode.com/posts"
        );
        assert_eq!(config.server.timeout_secs, 10);
        assert_eq!(config.server.interval_secs, 30);
    }

    #[test]
    fn test_partial_server_section() {
        let toml_str = r#"
[server]
interval_secs = 15
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.server.interval_secs, 15);
        assert_eq!(config.server.timeout_secs, 10);
    }

    #[test]
    fn test_store_path_override() {
        let toml_str = r#"
store_path = "/tmp/quotes-store"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(
            config.get_store_path().unwrap(),
            PathBuf::from("/tmp/quotes-store")
        );
    }
}
