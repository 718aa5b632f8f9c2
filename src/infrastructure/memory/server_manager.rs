//! In-Memory Server Manager Implementation

use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{
    registry_from_stored, ServerManagerPort, ServerState, StoredEntry, UserVoiceSettings,
};
use crate::domain::trigger::AudioUrl;

/// 内存服务器状态管理器
///
/// 每个服务器 ID 对应一份 `ServerState`，首次写入时惰性创建
pub struct InMemoryServerManager {
    servers: DashMap<String, ServerState>,
}

impl InMemoryServerManager {
    pub fn new() -> Self {
        Self {
            servers: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 用持久化数据批量恢复（启动时调用一次）
    pub fn seed_all(&self, servers: Vec<(String, Vec<StoredEntry>)>) {
        for (server_id, entries) in servers {
            self.seed(&server_id, entries);
        }
    }
}

impl Default for InMemoryServerManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerManagerPort for InMemoryServerManager {
    fn set_trigger(&self, server_id: &str, token: &str, url: AudioUrl) {
        let mut state = self
            .servers
            .entry(server_id.to_string())
            .or_default();
        state.registry.set(token, url);
        state.updated_at = Utc::now();
        tracing::debug!(server_id = %server_id, token = %token, "Trigger stored");
    }

    fn remove_trigger(&self, server_id: &str, token: &str) -> bool {
        match self.servers.get_mut(server_id) {
            Some(mut state) => {
                let removed = state.registry.remove(token);
                if removed {
                    state.updated_at = Utc::now();
                }
                removed
            }
            None => false,
        }
    }

    fn resolve_trigger(&self, server_id: &str, token: &str) -> Option<String> {
        self.servers
            .get(server_id)
            .and_then(|state| state.registry.resolve(token).map(|url| url.as_str().to_string()))
    }

    fn list_triggers(&self, server_id: &str) -> Vec<(String, String)> {
        self.servers
            .get(server_id)
            .map(|state| {
                state
                    .registry
                    .entries()
                    .into_iter()
                    .map(|(t, u)| (t.to_string(), u.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn trigger_count(&self, server_id: &str) -> usize {
        self.servers
            .get(server_id)
            .map(|state| state.registry.len())
            .unwrap_or(0)
    }

    fn user_settings(&self, server_id: &str, user_id: &str) -> UserVoiceSettings {
        self.servers
            .get(server_id)
            .and_then(|state| state.user_settings.get(user_id).cloned())
            .unwrap_or_default()
    }

    fn set_user_settings(&self, server_id: &str, user_id: &str, settings: UserVoiceSettings) {
        let mut state = self
            .servers
            .entry(server_id.to_string())
            .or_default();
        state.user_settings.insert(user_id.to_string(), settings);
        state.updated_at = Utc::now();
    }

    fn snapshot(&self, server_id: &str) -> Vec<StoredEntry> {
        self.servers
            .get(server_id)
            .map(|state| {
                state
                    .registry
                    .entries()
                    .into_iter()
                    .map(|(token, url)| StoredEntry {
                        token: token.to_string(),
                        url: url.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn seed(&self, server_id: &str, entries: Vec<StoredEntry>) {
        let count = entries.len();
        let mut state = self
            .servers
            .entry(server_id.to_string())
            .or_default();
        state.registry = registry_from_stored(entries);
        state.updated_at = Utc::now();
        tracing::info!(server_id = %server_id, triggers = count, "Server state seeded");
    }

    fn server_ids(&self) -> Vec<String> {
        self.servers.iter().map(|e| e.key().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> AudioUrl {
        AudioUrl::new(raw).unwrap()
    }

    #[test]
    fn test_state_created_lazily_per_server() {
        let manager = InMemoryServerManager::new();
        assert!(manager.server_ids().is_empty());
        assert_eq!(manager.trigger_count("guild-1"), 0);
        // 纯读取不创建状态
        assert!(manager.server_ids().is_empty());

        manager.set_trigger("guild-1", "alarm", url("https://example.com/a.mp3"));
        assert_eq!(manager.server_ids(), vec!["guild-1".to_string()]);
    }

    #[test]
    fn test_servers_are_isolated() {
        let manager = InMemoryServerManager::new();
        manager.set_trigger("guild-1", "alarm", url("https://example.com/a.mp3"));
        manager.set_trigger("guild-2", "alarm", url("https://example.com/b.mp3"));

        assert_eq!(
            manager.resolve_trigger("guild-1", "alarm").as_deref(),
            Some("https://example.com/a.mp3")
        );
        assert_eq!(
            manager.resolve_trigger("guild-2", "alarm").as_deref(),
            Some("https://example.com/b.mp3")
        );

        assert!(manager.remove_trigger("guild-1", "alarm"));
        assert!(manager.resolve_trigger("guild-1", "alarm").is_none());
        assert!(manager.resolve_trigger("guild-2", "alarm").is_some());
    }

    #[test]
    fn test_snapshot_and_seed_round_trip() {
        let manager = InMemoryServerManager::new();
        manager.set_trigger("guild-1", "alarm", url("https://example.com/a.mp3"));
        manager.set_trigger("guild-1", "horn", url("https://example.com/h.mp3"));

        let snapshot = manager.snapshot("guild-1");
        assert_eq!(snapshot.len(), 2);

        let restored = InMemoryServerManager::new();
        restored.seed("guild-1", snapshot);
        assert_eq!(
            restored.resolve_trigger("guild-1", "horn").as_deref(),
            Some("https://example.com/h.mp3")
        );
    }

    #[test]
    fn test_user_settings_default_when_unset() {
        let manager = InMemoryServerManager::new();
        assert_eq!(
            manager.user_settings("guild-1", "user-1"),
            UserVoiceSettings::default()
        );

        manager.set_user_settings(
            "guild-1",
            "user-1",
            UserVoiceSettings {
                voice_id: Some("da-DK-Standard-A".to_string()),
                language_code: None,
            },
        );
        assert_eq!(
            manager.user_settings("guild-1", "user-1").voice_id.as_deref(),
            Some("da-DK-Standard-A")
        );
    }
}
