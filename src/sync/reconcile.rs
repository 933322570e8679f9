use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use chrono::Utc;

use quote_types::{Quote, QuoteStore};

use super::server::{RemoteClient, SERVER_CATEGORY};

/// 合并远端列表：只保留本地没有的 text
///
/// 合并键是 text 精确相等；远端批内的重复同样会被折叠。
/// 不做版本号、时间戳或三方合并。
pub fn merge_remote(local: &[Quote], remote: Vec<Quote>) -> Vec<Quote> {
    let mut seen: HashSet<String> = local.iter().map(|q| q.text.clone()).collect();
    let mut fresh = Vec::new();

    for quote in remote {
        if seen.insert(quote.text.clone()) {
            fresh.push(quote);
        }
    }

    fresh
}

/// 单轮同步的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    /// 上一轮同步尚未结束，本轮被跳过
    pub skipped: bool,
    /// 远端返回的记录数
    pub fetched: usize,
    /// 本轮新追加的引语数
    pub appended: usize,
    /// 成功推送的本地引语数
    pub pushed: usize,
}

impl SyncOutcome {
    fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }
}

/// 同步引擎：按需或按固定间隔把远端列表并入本地集合
pub struct SyncEngine<S: QuoteStore> {
    store: S,
    remote: RemoteClient,
    push_local: bool,
    in_flight: AtomicBool,
}

impl<S: QuoteStore> SyncEngine<S> {
    pub fn new(store: S, remote: RemoteClient, push_local: bool) -> Self {
        Self {
            store,
            remote,
            push_local,
            in_flight: AtomicBool::new(false),
        }
    }

    /// 单次同步
    ///
    /// 上一轮仍在进行时直接跳过，防止定时器重入导致重复追加
    pub async fn sync_once(&self) -> Result<SyncOutcome> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::debug!("Previous sync still in flight, skipping this cycle");
            return Ok(SyncOutcome::skipped());
        }

        let result = self.run_cycle().await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn run_cycle(&self) -> Result<SyncOutcome> {
        // 网络失败只记录日志，本轮不触碰集合
        let remote_quotes = match self.remote.fetch_quotes().await {
            Ok(quotes) => quotes,
            Err(e) => {
                tracing::warn!("Sync fetch failed: {e:#}");
                return Ok(SyncOutcome::default());
            }
        };

        let fetched = remote_quotes.len();
        let local = self.store.load().await?;

        let fresh = merge_remote(&local, remote_quotes);
        let appended = fresh.len();
        if appended > 0 {
            self.store.append_batch(fresh).await?;
        }

        // 逐条推送本地引语（远端来源除外），失败即丢弃，不重试
        let mut pushed = 0;
        if self.push_local {
            for quote in local.iter().filter(|q| q.category != SERVER_CATEGORY) {
                match self.remote.push_quote(quote).await {
                    Ok(()) => pushed += 1,
                    Err(e) => tracing::warn!("Push failed for \"{}\": {e:#}", quote.text),
                }
            }
        }

        self.store.set_last_synced_at(Utc::now()).await?;

        Ok(SyncOutcome {
            skipped: false,
            fetched,
            appended,
            pushed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(text: &str, category: &str) -> Quote {
        Quote {
            text: text.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_merge_appends_only_unknown_text() {
        let local = vec![quote("known", "Life")];
        let remote = vec![quote("known", SERVER_CATEGORY), quote("new", SERVER_CATEGORY)];

        let fresh = merge_remote(&local, remote);

        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].text, "new");
    }

    #[test]
    fn test_merge_is_idempotent_when_remote_unchanged() {
        let mut local = vec![quote("a", "Life")];
        let remote = vec![quote("b", SERVER_CATEGORY)];

        local.extend(merge_remote(&local, remote.clone()));
        let len_after_first = local.len();

        local.extend(merge_remote(&local, remote));

        assert_eq!(local.len(), len_after_first);
    }

    #[test]
    fn test_merge_collapses_duplicates_within_remote_batch() {
        let local = vec![];
        let remote = vec![
            quote("twice", SERVER_CATEGORY),
            quote("twice", SERVER_CATEGORY),
        ];

        let fresh = merge_remote(&local, remote);

        assert_eq!(fresh.len(), 1);
    }

    #[test]
    fn test_merge_text_collision_ignores_category() {
        // 同文本不同分类会碰撞：远端版本不会被追加
        let local = vec![quote("same words", "Life")];
        let remote = vec![quote("same words", SERVER_CATEGORY)];

        assert!(merge_remote(&local, remote).is_empty());
    }

    #[test]
    fn test_merge_empty_remote_is_noop() {
        let local = vec![quote("a", "Life")];
        assert!(merge_remote(&local, vec![]).is_empty());
    }
}
