//! Sled-based Server Store Implementation
//!
//! 每个服务器一条记录：key `server:{id}`，value 为 bincode 序列化的条目快照

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sled::Db;
use std::sync::Arc;

use crate::application::ports::{ServerStorePort, StoreError, StoredEntry};

/// 记录 key 前缀
const SERVER_KEY_PREFIX: &str = "server:";

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStoreConfig {
    /// 数据库路径
    pub db_path: String,
}

impl Default for SledStoreConfig {
    fn default() -> Self {
        Self {
            db_path: "data/servers.sled".to_string(),
        }
    }
}

/// 持久化的服务器记录
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ServerRecord {
    entries: Vec<StoredEntry>,
    saved_at: i64,
}

/// Sled 服务器存储
pub struct SledServerStore {
    db: Db,
}

impl SledServerStore {
    pub fn new(config: &SledStoreConfig) -> Result<Self, StoreError> {
        let db = sled::open(&config.db_path)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tracing::info!(db_path = %config.db_path, "SledServerStore initialized");

        Ok(Self { db })
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 刷新数据库
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db
            .flush()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }

    fn server_key(server_id: &str) -> String {
        format!("{}{}", SERVER_KEY_PREFIX, server_id)
    }
}

#[async_trait]
impl ServerStorePort for SledServerStore {
    async fn save(&self, server_id: &str, entries: &[StoredEntry]) -> Result<(), StoreError> {
        let record = ServerRecord {
            entries: entries.to_vec(),
            saved_at: Utc::now().timestamp(),
        };
        let bytes = bincode::serialize(&record)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.db
            .insert(Self::server_key(server_id), bytes)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tracing::debug!(
            server_id = %server_id,
            triggers = entries.len(),
            "Server triggers persisted"
        );

        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<(String, Vec<StoredEntry>)>, StoreError> {
        let mut servers = Vec::new();

        for item in self.db.scan_prefix(SERVER_KEY_PREFIX) {
            let (key, value) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            let key = String::from_utf8(key.to_vec())
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            let server_id = key
                .strip_prefix(SERVER_KEY_PREFIX)
                .unwrap_or(&key)
                .to_string();

            let record: ServerRecord = bincode::deserialize(&value)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            servers.push((server_id, record.entries));
        }

        tracing::info!(servers = servers.len(), "Server triggers loaded");
        Ok(servers)
    }
}

/// 空实现：测试与 dry-run 模式下丢弃所有保存
pub struct NoopServerStore;

#[async_trait]
impl ServerStorePort for NoopServerStore {
    async fn save(&self, _server_id: &str, _entries: &[StoredEntry]) -> Result<(), StoreError> {
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<(String, Vec<StoredEntry>)>, StoreError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(token: &str, url: &str) -> StoredEntry {
        StoredEntry {
            token: token.to_string(),
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_then_load_all() {
        let dir = tempdir().unwrap();
        let config = SledStoreConfig {
            db_path: dir.path().join("test.sled").to_string_lossy().to_string(),
        };

        let store = SledServerStore::new(&config).unwrap();
        store
            .save(
                "guild-1",
                &[
                    entry("alarm", "https://example.com/a.mp3"),
                    entry("horn", "https://example.com/h.mp3"),
                ],
            )
            .await
            .unwrap();
        store
            .save("guild-2", &[entry("zebra", "https://example.com/z.mp3")])
            .await
            .unwrap();

        let mut loaded = store.load_all().await.unwrap();
        loaded.sort_by(|a, b| a.0.cmp(&b.0));

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].0, "guild-1");
        assert_eq!(loaded[0].1.len(), 2);
        assert_eq!(loaded[1].0, "guild-2");
        assert_eq!(loaded[1].1[0].token, "zebra");
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let dir = tempdir().unwrap();
        let config = SledStoreConfig {
            db_path: dir.path().join("test.sled").to_string_lossy().to_string(),
        };

        let store = SledServerStore::new(&config).unwrap();
        store
            .save("guild-1", &[entry("alarm", "https://example.com/a.mp3")])
            .await
            .unwrap();
        store.save("guild-1", &[]).await.unwrap();

        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].1.is_empty());
    }

    #[tokio::test]
    async fn test_reopen_keeps_data() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.sled").to_string_lossy().to_string();

        {
            let store = SledServerStore::new(&SledStoreConfig {
                db_path: db_path.clone(),
            })
            .unwrap();
            store
                .save("guild-1", &[entry("alarm", "https://example.com/a.mp3")])
                .await
                .unwrap();
            store.flush().unwrap();
        }

        let store = SledServerStore::new(&SledStoreConfig { db_path }).unwrap();
        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].1[0].url, "https://example.com/a.mp3");
    }
}
