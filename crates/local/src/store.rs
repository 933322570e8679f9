use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quote_types::{default_quotes, Quote, QuoteStore, StoreConfig};

use crate::files::atomic_write_str;

/// JSON 文件本地存储客户端
///
/// 目录布局：
///   <path>/quotes.json   完整引语集合（每次变更整体重写）
///   <path>/state.json    跨会话 UI 状态（分类过滤器、同步时间）
///
/// 会话状态（最近展示的引语）单独存放在系统临时目录，
/// 不随集合持久化；可通过 session_path 覆盖。
pub struct LocalQuoteStore {
    quotes_path: PathBuf,
    state_path: PathBuf,
    session_path: PathBuf,
}

/// 跨会话 UI 状态
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreState {
    #[serde(default)]
    last_category: Option<String>,
    #[serde(default)]
    last_synced_at: Option<DateTime<Utc>>,
}

#[async_trait]
impl QuoteStore for LocalQuoteStore {
    async fn connect(config: &StoreConfig) -> Result<Self> {
        let dir = PathBuf::from(&config.path);
        let session_path = match &config.session_path {
            Some(path) => PathBuf::from(path),
            None => std::env::temp_dir().join("quote-session.json"),
        };

        Ok(Self {
            quotes_path: dir.join("quotes.json"),
            state_path: dir.join("state.json"),
            session_path,
        })
    }

    async fn exists(&self) -> Result<bool> {
        Ok(self.quotes_path.exists())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.load().await?.len())
    }

    async fn load(&self) -> Result<Vec<Quote>> {
        Ok(read_json_or(&self.quotes_path, default_quotes).await)
    }

    async fn append(&self, quote: Quote) -> Result<()> {
        let mut quotes = self.load().await?;
        quotes.push(quote);
        self.persist(&quotes)
    }

    async fn append_batch(&self, batch: Vec<Quote>) -> Result<()> {
        let mut quotes = self.load().await?;
        quotes.extend(batch);
        self.persist(&quotes)
    }

    async fn replace_all(&self, quotes: Vec<Quote>) -> Result<()> {
        self.persist(&quotes)
    }

    async fn last_category(&self) -> Result<Option<String>> {
        Ok(self.load_state().await.last_category)
    }

    async fn set_last_category(&self, category: &str) -> Result<()> {
        let mut state = self.load_state().await;
        state.last_category = Some(category.to_string());
        self.persist_state(&state)
    }

    async fn last_synced_at(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.load_state().await.last_synced_at)
    }

    async fn set_last_synced_at(&self, at: DateTime<Utc>) -> Result<()> {
        let mut state = self.load_state().await;
        state.last_synced_at = Some(at);
        self.persist_state(&state)
    }

    async fn last_quote(&self) -> Result<Option<Quote>> {
        Ok(read_json_or(&self.session_path, || None).await)
    }

    async fn set_last_quote(&self, quote: &Quote) -> Result<()> {
        let content = serde_json::to_string(quote).context("Failed to serialize last quote")?;
        atomic_write_str(&self.session_path, &content).with_context(|| {
            format!(
                "Failed to write session state: {}",
                self.session_path.display()
            )
        })?;
        Ok(())
    }
}

// 私有辅助方法
impl LocalQuoteStore {
    /// 序列化完整集合并原子替换旧值
    fn persist(&self, quotes: &[Quote]) -> Result<()> {
        let content =
            serde_json::to_string_pretty(quotes).context("Failed to serialize quotes")?;
        atomic_write_str(&self.quotes_path, &content).with_context(|| {
            format!("Failed to write collection: {}", self.quotes_path.display())
        })?;
        Ok(())
    }

    fn persist_state(&self, state: &StoreState) -> Result<()> {
        let content =
            serde_json::to_string_pretty(state).context("Failed to serialize store state")?;
        atomic_write_str(&self.state_path, &content).with_context(|| {
            format!("Failed to write store state: {}", self.state_path.display())
        })?;
        Ok(())
    }

    async fn load_state(&self) -> StoreState {
        read_json_or(&self.state_path, StoreState::default).await
    }
}

/// 读取 JSON 文件；缺失或损坏时回退到默认值（fail-open）
async fn read_json_or<T, F>(path: &Path, fallback: F) -> T
where
    T: serde::de::DeserializeOwned,
    F: FnOnce() -> T,
{
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(_) => return fallback(),
    };

    match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Discarding malformed data at {}: {}", path.display(), e);
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    async fn store_in(dir: &TempDir) -> LocalQuoteStore {
        let config = StoreConfig {
            path: dir.path().to_string_lossy().to_string(),
            session_path: Some(
                dir.path()
                    .join("session.json")
                    .to_string_lossy()
                    .to_string(),
            ),
        };
        LocalQuoteStore::connect(&config).await.unwrap()
    }

    #[tokio::test]
    async fn test_load_falls_back_to_defaults_when_missing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir).await;

        assert!(!store.exists().await.unwrap());
        let quotes = store.load().await.unwrap();
        assert_eq!(quotes, default_quotes());
    }

    #[tokio::test]
    async fn test_load_falls_back_to_defaults_when_malformed() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("quotes.json"), "not json at all {{{").unwrap();

        let store = store_in(&dir).await;
        let quotes = store.load().await.unwrap();
        assert_eq!(quotes, default_quotes());
    }

    #[tokio::test]
    async fn test_append_grows_collection_by_one_and_persists() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir).await;

        let quote = Quote::new("fresh thought", "Testing").unwrap();
        store.append(quote.clone()).await.unwrap();

        assert_eq!(store.count().await.unwrap(), default_quotes().len() + 1);

        // 重新连接验证持久化
        let reopened = store_in(&dir).await;
        let quotes = reopened.load().await.unwrap();
        assert_eq!(quotes.last(), Some(&quote));
    }

    #[tokio::test]
    async fn test_append_batch_appends_in_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir).await;

        let batch = vec![
            Quote::new("first", "Batch").unwrap(),
            Quote::new("second", "Batch").unwrap(),
        ];
        store.append_batch(batch).await.unwrap();

        let quotes = store.load().await.unwrap();
        let tail: Vec<&str> = quotes[quotes.len() - 2..]
            .iter()
            .map(|q| q.text.as_str())
            .collect();
        assert_eq!(tail, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_replace_all_overwrites_prior_value() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir).await;

        store
            .replace_all(vec![Quote::new("only one", "Solo").unwrap()])
            .await
            .unwrap();

        assert!(store.exists().await.unwrap());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_last_category_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir).await;

        assert_eq!(store.last_category().await.unwrap(), None);

        store.set_last_category("Life").await.unwrap();
        assert_eq!(store.last_category().await.unwrap(), Some("Life".into()));

        store.set_last_category("all").await.unwrap();
        assert_eq!(store.last_category().await.unwrap(), Some("all".into()));
    }

    #[tokio::test]
    async fn test_last_synced_at_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir).await;

        assert_eq!(store.last_synced_at().await.unwrap(), None);

        let now = Utc::now();
        store.set_last_synced_at(now).await.unwrap();
        assert_eq!(store.last_synced_at().await.unwrap(), Some(now));

        // 同步时间不影响分类过滤器状态
        assert_eq!(store.last_category().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_last_quote_session_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir).await;

        assert_eq!(store.last_quote().await.unwrap(), None);

        let quote = Quote::new("remember me", "Session").unwrap();
        store.set_last_quote(&quote).await.unwrap();
        assert_eq!(store.last_quote().await.unwrap(), Some(quote));
    }

    #[tokio::test]
    async fn test_persist_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir).await;

        store.append(Quote::new("a", "B").unwrap()).await.unwrap();
        store.set_last_category("B").await.unwrap();

        let mut names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();

        assert_eq!(names, vec!["quotes.json", "state.json"]);
    }
}
