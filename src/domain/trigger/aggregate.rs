//! Trigger Context - Aggregate Root

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::value_objects::AudioUrl;

/// 单条触发词绑定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerEntry {
    pub token: String,
    pub url: AudioUrl,
}

/// TriggerRegistry 聚合根
///
/// 一个服务器拥有且仅拥有一个注册表，与服务器同生命周期。
///
/// 不变量:
/// - token 在注册表内唯一（区分大小写）
/// - 写入的 URL 已通过 AudioUrl 的安全校验
/// - 查询只命中显式写入本注册表的键，不存在任何继承的默认值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriggerRegistry {
    entries: HashMap<String, TriggerEntry>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已持久化的条目重建注册表
    pub fn from_entries(entries: impl IntoIterator<Item = TriggerEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| (e.token.clone(), e))
                .collect(),
        }
    }

    /// 写入或覆盖一条绑定
    pub fn set(&mut self, token: impl Into<String>, url: AudioUrl) {
        let token = token.into();
        self.entries
            .insert(token.clone(), TriggerEntry { token, url });
    }

    /// 删除绑定，键不存在时为幂等的 no-op
    pub fn remove(&mut self, token: &str) -> bool {
        self.entries.remove(token).is_some()
    }

    /// 解析触发词为绑定的音频 URL
    pub fn resolve(&self, token: &str) -> Option<&AudioUrl> {
        self.entries.get(token).map(|e| &e.url)
    }

    /// 按 token 排序列出全部绑定，保证列表输出稳定
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut list: Vec<(&str, &str)> = self
            .entries
            .values()
            .map(|e| (e.token.as_str(), e.url.as_str()))
            .collect();
        list.sort_by_key(|(token, _)| *token);
        list
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> AudioUrl {
        AudioUrl::new(raw).unwrap()
    }

    #[test]
    fn test_set_then_resolve() {
        let mut registry = TriggerRegistry::new();
        registry.set("alarm", url("https://example.com/a.mp3"));

        assert_eq!(
            registry.resolve("alarm").map(AudioUrl::as_str),
            Some("https://example.com/a.mp3")
        );
        assert!(registry.resolve("other").is_none());
    }

    #[test]
    fn test_set_overwrites_existing_token() {
        let mut registry = TriggerRegistry::new();
        registry.set("alarm", url("https://example.com/a.mp3"));
        registry.set("alarm", url("https://example.com/b.mp3"));

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.resolve("alarm").map(AudioUrl::as_str),
            Some("https://example.com/b.mp3")
        );
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut registry = TriggerRegistry::new();
        registry.set("alarm", url("https://example.com/a.mp3"));

        assert!(registry.remove("alarm"));
        assert!(!registry.remove("alarm"));
        assert!(registry.resolve("alarm").is_none());
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        let mut registry = TriggerRegistry::new();
        registry.set("Alarm", url("https://example.com/a.mp3"));

        assert!(registry.resolve("alarm").is_none());
        assert!(registry.resolve("Alarm").is_some());
    }

    #[test]
    fn test_entries_sorted_by_token() {
        let mut registry = TriggerRegistry::new();
        registry.set("zebra", url("https://example.com/z.mp3"));
        registry.set("alarm", url("https://example.com/a.mp3"));
        registry.set("horn", url("https://example.com/h.mp3"));

        let tokens: Vec<&str> = registry.entries().iter().map(|(t, _)| *t).collect();
        assert_eq!(tokens, vec!["alarm", "horn", "zebra"]);
    }
}
