//! Server Store Port - 服务器注册表持久化抽象
//!
//! 每次注册表变更后调用一次 save；失败由调用方记日志，不在本核心重试。
//! 具体实现在 infrastructure/persistence 层。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 持久化错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// 持久化的触发词条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub token: String,
    pub url: String,
}

/// Server Store Port
#[async_trait]
pub trait ServerStorePort: Send + Sync {
    /// 保存一个服务器的全部触发词条目（整体覆盖）
    async fn save(&self, server_id: &str, entries: &[StoredEntry]) -> Result<(), StoreError>;

    /// 启动时加载所有服务器的条目
    async fn load_all(&self) -> Result<Vec<(String, Vec<StoredEntry>)>, StoreError>;
}
