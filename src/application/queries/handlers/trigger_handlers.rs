//! Trigger Query Handlers

use std::sync::Arc;

use crate::application::ports::{ServerManagerPort, SpeechPayload};
use crate::application::queries::{ListTriggers, ResolveToken};

/// ResolveToken Handler
///
/// token 监听钩子：只命中该服务器注册表里显式写入的键，
/// 未命中返回 None，从不报错
pub struct ResolveTokenHandler {
    servers: Arc<dyn ServerManagerPort>,
}

impl ResolveTokenHandler {
    pub fn new(servers: Arc<dyn ServerManagerPort>) -> Self {
        Self { servers }
    }

    pub fn handle(&self, query: ResolveToken) -> Option<SpeechPayload> {
        self.servers
            .resolve_trigger(&query.server_id, &query.token)
            .map(SpeechPayload::audio)
    }
}

/// ListTriggers Handler
pub struct ListTriggersHandler {
    servers: Arc<dyn ServerManagerPort>,
}

impl ListTriggersHandler {
    pub fn new(servers: Arc<dyn ServerManagerPort>) -> Self {
        Self { servers }
    }

    pub fn handle(&self, query: ListTriggers) -> Vec<(String, String)> {
        self.servers.list_triggers(&query.server_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trigger::AudioUrl;
    use crate::infrastructure::memory::InMemoryServerManager;

    #[test]
    fn test_resolve_only_own_keys() {
        let servers = Arc::new(InMemoryServerManager::new());
        servers.set_trigger(
            "guild-1",
            "horn",
            AudioUrl::new("https://example.com/h.mp3").unwrap(),
        );
        let handler = ResolveTokenHandler::new(servers);

        let hit = handler.handle(ResolveToken {
            server_id: "guild-1".to_string(),
            token: "horn".to_string(),
        });
        assert_eq!(
            hit.map(|p| p.audio_url),
            Some("https://example.com/h.mp3".to_string())
        );

        // 其他服务器的注册表不可见
        let miss = handler.handle(ResolveToken {
            server_id: "guild-2".to_string(),
            token: "horn".to_string(),
        });
        assert!(miss.is_none());
    }

    #[test]
    fn test_list_triggers_sorted() {
        let servers = Arc::new(InMemoryServerManager::new());
        servers.set_trigger(
            "guild-1",
            "zebra",
            AudioUrl::new("https://example.com/z.mp3").unwrap(),
        );
        servers.set_trigger(
            "guild-1",
            "alarm",
            AudioUrl::new("https://example.com/a.mp3").unwrap(),
        );
        let handler = ListTriggersHandler::new(servers);

        let entries = handler.handle(ListTriggers {
            server_id: "guild-1".to_string(),
        });
        let tokens: Vec<&str> = entries.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tokens, vec!["alarm", "zebra"]);
    }
}
