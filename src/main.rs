//! Chatvox - 聊天服务器音效与语音目录核心
//!
//! 架构:
//! - Domain: trigger/, voice/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: console, memory, persistence, adapters

use std::sync::Arc;

use chatvox::application::commands::handlers::SfxCommandHandler;
use chatvox::application::ports::{ServerStorePort, SpeechPort};
use chatvox::application::queries::handlers::ResolveTokenHandler;
use chatvox::config::{load_config, print_config};
use chatvox::infrastructure::adapters::{
    HttpSpeechClient, HttpSpeechClientConfig, RecordingSpeechClient, StaticLocalizer,
};
use chatvox::infrastructure::memory::InMemoryServerManager;
use chatvox::infrastructure::persistence::sled::{
    NoopServerStore, SledServerStore, SledStoreConfig,
};
use chatvox::infrastructure::ConsoleDispatcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},chatvox={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Chatvox - 聊天服务器音效核心");
    print_config(&config);

    // 触发词存储（干跑模式下不落盘）
    let store: Arc<dyn ServerStorePort> = if config.speech.dry_run {
        Arc::new(NoopServerStore)
    } else {
        if let Some(parent) = std::path::Path::new(&config.storage.db_path).parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let store_config = SledStoreConfig {
            db_path: config.storage.db_path.clone(),
        };
        SledServerStore::new(&store_config)
            .map_err(|e| anyhow::anyhow!("Failed to open trigger store: {}", e))?
            .arc()
    };

    // 内存服务器状态，从存储恢复历史触发词
    let servers = InMemoryServerManager::new().arc();
    let snapshot = store
        .load_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load trigger snapshots: {}", e))?;
    tracing::info!(servers = snapshot.len(), "Restored trigger snapshots");
    servers.seed_all(snapshot);

    // 语音服务客户端
    let speech: Arc<dyn SpeechPort> = if config.speech.dry_run {
        Arc::new(RecordingSpeechClient::new())
    } else {
        let speech_config = HttpSpeechClientConfig::new(config.speech.url.clone())
            .with_timeout(config.speech.timeout_secs);
        Arc::new(
            HttpSpeechClient::new(speech_config)
                .map_err(|e| anyhow::anyhow!("Failed to build speech client: {}", e))?,
        )
    };

    let localizer = Arc::new(StaticLocalizer::new());

    // 组装处理器
    let sfx_handler = SfxCommandHandler::new(
        servers.clone(),
        speech.clone(),
        store.clone(),
        localizer,
    );
    let resolver = ResolveTokenHandler::new(servers.clone());

    // 启动控制台派发器（ctrl-c 退出）
    let dispatcher = ConsoleDispatcher::new(
        config.console.clone(),
        sfx_handler,
        resolver,
        speech,
        servers,
    );
    dispatcher.run().await?;

    tracing::info!("Shutdown complete");

    Ok(())
}
