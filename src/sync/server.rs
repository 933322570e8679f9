use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use quote_types::Quote;

/// 远端引语统一挂载的分类
///
/// 远端没有真正的引语 schema，拉取到的记录被降级处理：
/// title 映射为 text，分类固定为 "Server"
pub const SERVER_CATEGORY: &str = "Server";

/// 同步服务器客户端
pub struct RemoteClient {
    client: Client,
    base_url: String,
}

/// 远端返回的通用记录，只关心 title 字段
#[derive(Debug, Deserialize)]
struct RemoteRecord {
    title: String,
}

impl RemoteClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// 拉取远端列表并降级为引语
    pub async fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .context("Failed to fetch from sync server")?;

        if !response.status().is_success() {
            anyhow::bail!("Sync server error ({})", response.status());
        }

        let records: Vec<RemoteRecord> = response
            .json()
            .await
            .context("Failed to parse sync server response")?;

        Ok(records
            .into_iter()
            .map(|record| Quote {
                text: record.title,
                category: SERVER_CATEGORY.to_string(),
            })
            .collect())
    }

    /// 推送单条引语；响应体被忽略
    pub async fn push_quote(&self, quote: &Quote) -> Result<()> {
        let response = self
            .client
            .post(&self.base_url)
            .json(quote)
            .send()
            .await
            .context("Failed to push quote to sync server")?;

        if !response.status().is_success() {
            anyhow::bail!("Sync server error ({})", response.status());
        }

        Ok(())
    }
}
