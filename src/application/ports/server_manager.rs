//! Server Manager Port - 服务器聚合状态访问
//!
//! 每个服务器有且仅有一个 `ServerState`，在首次写入时惰性创建，
//! 与服务器条目同生命周期。外部派发器保证对同一服务器的命令串行，
//! 本核心不做命令间的互斥。

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::trigger::{AudioUrl, TriggerEntry, TriggerRegistry};

use super::server_store::StoredEntry;
use super::speech::UserVoiceSettings;

/// 单个服务器的聚合状态
///
/// 注册表归属于它的服务器，随服务器条目创建与销毁
#[derive(Debug, Clone)]
pub struct ServerState {
    pub registry: TriggerRegistry,
    /// 各用户的语音偏好
    pub user_settings: HashMap<String, UserVoiceSettings>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            registry: TriggerRegistry::new(),
            user_settings: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Server Manager Port
pub trait ServerManagerPort: Send + Sync {
    /// 写入或覆盖一条触发词绑定
    fn set_trigger(&self, server_id: &str, token: &str, url: AudioUrl);

    /// 删除绑定；键不存在时返回 false，不报错
    fn remove_trigger(&self, server_id: &str, token: &str) -> bool;

    /// 解析触发词；只命中该服务器显式写入的键
    fn resolve_trigger(&self, server_id: &str, token: &str) -> Option<String>;

    /// 按 token 排序列出绑定
    fn list_triggers(&self, server_id: &str) -> Vec<(String, String)>;

    fn trigger_count(&self, server_id: &str) -> usize;

    /// 读取用户语音偏好；未设置时返回默认值，不创建状态
    fn user_settings(&self, server_id: &str, user_id: &str) -> UserVoiceSettings;

    fn set_user_settings(&self, server_id: &str, user_id: &str, settings: UserVoiceSettings);

    /// 导出一个服务器的条目快照，供持久化使用
    fn snapshot(&self, server_id: &str) -> Vec<StoredEntry>;

    /// 从持久化条目恢复一个服务器的注册表（启动时使用）
    fn seed(&self, server_id: &str, entries: Vec<StoredEntry>);

    fn server_ids(&self) -> Vec<String>;
}

/// 将持久化条目还原为注册表
///
/// 按规约，写入时已通过安全校验，读取时不重复校验；
/// 无法还原的条目跳过并记日志
pub fn registry_from_stored(entries: Vec<StoredEntry>) -> TriggerRegistry {
    let mut restored = Vec::with_capacity(entries.len());
    for entry in entries {
        match AudioUrl::new(entry.url) {
            Ok(url) => restored.push(TriggerEntry {
                token: entry.token,
                url,
            }),
            Err(e) => {
                tracing::warn!(token = %entry.token, error = %e, "Skipping invalid stored trigger");
            }
        }
    }
    TriggerRegistry::from_entries(restored)
}
