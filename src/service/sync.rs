use std::time::Duration;

use anyhow::Result;

use crate::config::AppConfig;
use crate::sync::{RemoteClient, SyncEngine, SyncOutcome};
use crate::ui::Output;
use quote_local::LocalQuoteStore;
use quote_types::{QuoteStore, StoreConfig};

pub async fn sync(
    watch: bool,
    push: bool,
    interval: Option<u64>,
    force_local: bool,
    force_global: bool,
) -> Result<()> {
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
    output.store_info(&store_path, store.count().await?);

    let remote = RemoteClient::new(&config.server.url, config.server.timeout_secs)?;
    let engine = SyncEngine::new(store, remote, push);

    if !watch {
        output.status("Syncing", &config.server.url);
        let outcome = engine.sync_once().await?;
        report(&output, &outcome);
        return Ok(());
    }

    let period = Duration::from_secs(interval.unwrap_or(config.server.interval_secs));
    output.status(
        "Watching",
        &format!("{} (every {}s)", config.server.url, period.as_secs()),
    );

    let mut ticker = tokio::time::interval(period);
    loop {
        ticker.tick().await;

        // 定时器无条件继续：单轮失败只上报，不中断循环
        match engine.sync_once().await {
            Ok(outcome) => report(&output, &outcome),
            Err(e) => output.error(&format!("{e:#}")),
        }
    }
}

fn report(output: &Output, outcome: &SyncOutcome) {
    if outcome.skipped {
        output.warning("Previous sync still running, cycle skipped");
        return;
    }

    if outcome.appended > 0 {
        output.note("Quotes synced with server!");
        output.status(
            "Merged",
            &format!("{} new quotes from server", outcome.appended),
        );
    } else {
        output.status("Checked", "collection up to date");
    }

    if outcome.pushed > 0 {
        output.status("Pushed", &format!("{} local quotes", outcome.pushed));
    }
}
