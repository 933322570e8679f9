use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::Quote;

/// 存储后端的统一接口
///
/// 任何存储实现（本地文件、远程、内存）都应该实现这个 trait
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// 连接/初始化存储
    async fn connect(config: &StoreConfig) -> Result<Self>
    where
        Self: Sized;

    /// 集合是否已持久化过
    async fn exists(&self) -> Result<bool>;

    /// 获取引语总数
    async fn count(&self) -> Result<usize>;

    /// 加载完整集合
    ///
    /// 持久化数据缺失或损坏时回退到内置默认集合，从不报错
    async fn load(&self) -> Result<Vec<Quote>>;

    /// 追加单条引语并持久化
    async fn append(&self, quote: Quote) -> Result<()>;

    /// 批量追加（批量导入、同步合并）并持久化一次
    async fn append_batch(&self, quotes: Vec<Quote>) -> Result<()>;

    /// 用给定集合整体替换持久化内容
    async fn replace_all(&self, quotes: Vec<Quote>) -> Result<()>;

    /// 上次选择的分类过滤器（跨会话保留，含哨兵值 "all"）
    async fn last_category(&self) -> Result<Option<String>>;

    /// 记住分类过滤器选择
    async fn set_last_category(&self, category: &str) -> Result<()>;

    /// 上次成功同步的时间
    async fn last_synced_at(&self) -> Result<Option<DateTime<Utc>>>;

    /// 记录同步完成时间
    async fn set_last_synced_at(&self, at: DateTime<Utc>) -> Result<()>;

    /// 本会话最近展示过的引语
    async fn last_quote(&self) -> Result<Option<Quote>>;

    /// 记录最近展示的引语（会话级，不随集合持久化）
    async fn set_last_quote(&self, quote: &Quote) -> Result<()>;
}

/// 存储配置（通用）
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: String,
    /// 会话文件路径覆盖（默认使用系统临时目录）
    pub session_path: Option<String>,
    // 未来可扩展：url, auth, etc.
}
