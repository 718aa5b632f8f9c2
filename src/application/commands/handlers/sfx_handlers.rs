//! Sfx Command Handler
//!
//! 把原始参数分类后执行：一次性播放、列表、删除、设置、触发词播放。
//! 校验失败表达为本地化回复；静默 no-op 表达为 None；
//! speak/save 是 fire-and-forget 移交，失败只记日志，不重试，
//! 因此命令本身不会失败。

use std::sync::Arc;

use crate::application::commands::SfxCommand;
use crate::application::ports::{
    keys, LocalizerPort, ServerManagerPort, ServerStorePort, SpeechPayload, SpeechPort,
};
use crate::domain::trigger::{
    is_delete_verb, is_set_verb, parse_sfx_request, AudioUrl, SfxRequest, TriggerError,
};

/// 命令处理结果：Some(reply) 为用户可见回复，None 为静默
pub type SfxReply = Option<String>;

/// SfxCommand Handler
pub struct SfxCommandHandler {
    servers: Arc<dyn ServerManagerPort>,
    speech: Arc<dyn SpeechPort>,
    store: Arc<dyn ServerStorePort>,
    localizer: Arc<dyn LocalizerPort>,
}

impl SfxCommandHandler {
    pub fn new(
        servers: Arc<dyn ServerManagerPort>,
        speech: Arc<dyn SpeechPort>,
        store: Arc<dyn ServerStorePort>,
        localizer: Arc<dyn LocalizerPort>,
    ) -> Self {
        Self {
            servers,
            speech,
            store,
            localizer,
        }
    }

    pub async fn handle(&self, command: SfxCommand) -> SfxReply {
        match parse_sfx_request(&command.raw) {
            SfxRequest::PlayUrl(url) => self.play_url(&command, &url).await,
            SfxRequest::Usage => Some(self.localizer.message(keys::SFX_USAGE)),
            SfxRequest::TooManyArguments => Some(self.localizer.message(keys::SFX_TOO_MANY)),
            SfxRequest::List => Some(self.render_list(&command.server_id)),
            SfxRequest::Play(token) => self.play_token(&command, &token).await,
            SfxRequest::Delete { verb, token } => self.delete(&command, &verb, &token).await,
            SfxRequest::Set { verb, token, url } => {
                self.set(&command, &verb, &token, &url).await
            }
        }
    }

    /// 一次性播放：不注册，无状态变更
    async fn play_url(&self, command: &SfxCommand, url: &str) -> SfxReply {
        match AudioUrl::new(url) {
            Err(TriggerError::UrlTooShort) => None,
            Err(TriggerError::InsecureUrl) => Some(self.localizer.message(keys::SFX_NEEDS_HTTPS)),
            Ok(audio) => {
                self.speak(command, audio.as_str()).await;
                None
            }
        }
    }

    /// 播放已注册的触发词；未注册时静默
    async fn play_token(&self, command: &SfxCommand, token: &str) -> SfxReply {
        if let Some(url) = self.servers.resolve_trigger(&command.server_id, token) {
            self.speak(command, &url).await;
        }
        None
    }

    fn render_list(&self, server_id: &str) -> String {
        let entries = self.servers.list_triggers(server_id);
        if entries.is_empty() {
            return self.localizer.message(keys::SFX_LIST_NONE);
        }

        let mut block = String::from("```\n");
        for (token, url) in entries {
            block.push_str(&token);
            block.push_str("\t\t");
            block.push_str(&url);
            block.push('\n');
        }
        block.push_str("```");
        block
    }

    async fn delete(&self, command: &SfxCommand, verb: &str, token: &str) -> SfxReply {
        if !command.requester.can_manage_server {
            return Some(self.localizer.message(keys::SFX_NOT_PERMITTED));
        }
        if !is_delete_verb(verb) {
            return Some(self.localizer.message(keys::SFX_BAD_DELETE));
        }

        let removed = self.servers.remove_trigger(&command.server_id, token);
        self.persist(&command.server_id).await;

        tracing::info!(
            server_id = %command.server_id,
            token = %token,
            removed = removed,
            "Trigger delete handled"
        );

        // 成功删除不发确认，键不存在也同样静默
        None
    }

    async fn set(&self, command: &SfxCommand, verb: &str, token: &str, url: &str) -> SfxReply {
        if !command.requester.can_manage_server {
            return Some(self.localizer.message(keys::SFX_NOT_PERMITTED));
        }
        if !is_set_verb(verb) {
            return Some(self.localizer.message(keys::SFX_BAD_SET));
        }

        let audio = match AudioUrl::new(url) {
            Err(TriggerError::UrlTooShort) => return None,
            Err(TriggerError::InsecureUrl) => {
                return Some(self.localizer.message(keys::SFX_NEEDS_HTTPS))
            }
            Ok(audio) => audio,
        };

        self.servers.set_trigger(&command.server_id, token, audio);
        self.persist(&command.server_id).await;

        tracing::info!(
            server_id = %command.server_id,
            token = %token,
            "Trigger set"
        );

        Some(self.localizer.localize(keys::SFX_OKAY, &[("emoji", token)]))
    }

    /// 移交播放请求，失败只记日志
    async fn speak(&self, command: &SfxCommand, url: &str) {
        let settings = self
            .servers
            .user_settings(&command.server_id, &command.requester.user_id);
        let payload = SpeechPayload::audio(url);

        tracing::debug!(
            request_id = %payload.request_id,
            server_id = %command.server_id,
            url = %payload.audio_url,
            "Handing off playback"
        );

        if let Err(e) = self.speech.speak(payload, &settings).await {
            tracing::warn!(server_id = %command.server_id, error = %e, "Speech handoff failed");
        }
    }

    /// 变更后持久化整个注册表快照，失败只记日志
    async fn persist(&self, server_id: &str) {
        let snapshot = self.servers.snapshot(server_id);
        if let Err(e) = self.store.save(server_id, &snapshot).await {
            tracing::warn!(server_id = %server_id, error = %e, "Failed to persist trigger registry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::Requester;
    use crate::application::ports::{StoreError, StoredEntry, UserVoiceSettings};
    use crate::infrastructure::adapters::lang::StaticLocalizer;
    use crate::infrastructure::adapters::speech::RecordingSpeechClient;
    use crate::infrastructure::memory::InMemoryServerManager;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// 记录每次 save 调用的测试桩
    #[derive(Default)]
    struct RecordingStore {
        saves: Mutex<Vec<(String, Vec<StoredEntry>)>>,
        fail_saves: bool,
    }

    impl RecordingStore {
        fn save_count(&self) -> usize {
            self.saves.lock().unwrap().len()
        }

        fn last_save(&self) -> Option<(String, Vec<StoredEntry>)> {
            self.saves.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl ServerStorePort for RecordingStore {
        async fn save(
            &self,
            server_id: &str,
            entries: &[StoredEntry],
        ) -> Result<(), StoreError> {
            if self.fail_saves {
                return Err(StoreError::Database("disk full".to_string()));
            }
            self.saves
                .lock()
                .unwrap()
                .push((server_id.to_string(), entries.to_vec()));
            Ok(())
        }

        async fn load_all(&self) -> Result<Vec<(String, Vec<StoredEntry>)>, StoreError> {
            Ok(Vec::new())
        }
    }

    struct Fixture {
        servers: Arc<InMemoryServerManager>,
        speech: Arc<RecordingSpeechClient>,
        store: Arc<RecordingStore>,
        localizer: Arc<StaticLocalizer>,
        handler: SfxCommandHandler,
    }

    fn fixture() -> Fixture {
        fixture_with_store(RecordingStore::default())
    }

    fn fixture_with_store(store: RecordingStore) -> Fixture {
        let servers = Arc::new(InMemoryServerManager::new());
        let speech = Arc::new(RecordingSpeechClient::new());
        let store = Arc::new(store);
        let localizer = Arc::new(StaticLocalizer::new());
        let handler = SfxCommandHandler::new(
            servers.clone(),
            speech.clone(),
            store.clone(),
            localizer.clone(),
        );
        Fixture {
            servers,
            speech,
            store,
            localizer,
            handler,
        }
    }

    fn command(raw: &str, can_manage: bool) -> SfxCommand {
        SfxCommand {
            server_id: "guild-1".to_string(),
            requester: Requester::new("user-1", can_manage),
            raw: raw.to_string(),
        }
    }

    #[tokio::test]
    async fn test_set_registers_and_confirms() {
        let f = fixture();

        let reply = f
            .handler
            .handle(command("set alarm https://example.com/a.mp3", true))
            .await;

        assert_eq!(
            f.servers.resolve_trigger("guild-1", "alarm").as_deref(),
            Some("https://example.com/a.mp3")
        );
        let reply = reply.expect("confirmation expected");
        assert!(reply.contains("alarm"));
        assert_eq!(f.store.save_count(), 1);
        let (saved_id, entries) = f.store.last_save().unwrap();
        assert_eq!(saved_id, "guild-1");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].token, "alarm");
    }

    #[tokio::test]
    async fn test_set_without_capability_rejected() {
        let f = fixture();

        let reply = f
            .handler
            .handle(command("set alarm https://example.com/a.mp3", false))
            .await;

        assert_eq!(reply, Some(f.localizer.message(keys::SFX_NOT_PERMITTED)));
        assert!(f.servers.resolve_trigger("guild-1", "alarm").is_none());
        assert_eq!(f.store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_set_with_wrong_verb_blocked() {
        let f = fixture();

        let reply = f
            .handler
            .handle(command("put alarm https://example.com/a.mp3", true))
            .await;

        assert_eq!(reply, Some(f.localizer.message(keys::SFX_BAD_SET)));
        assert!(f.servers.resolve_trigger("guild-1", "alarm").is_none());
        assert_eq!(f.store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_set_insecure_url_rejected() {
        let f = fixture();

        let reply = f
            .handler
            .handle(command("set alarm http://example.com/a.mp3", true))
            .await;

        assert_eq!(reply, Some(f.localizer.message(keys::SFX_NEEDS_HTTPS)));
        assert!(f.servers.resolve_trigger("guild-1", "alarm").is_none());
    }

    #[tokio::test]
    async fn test_set_short_url_silent() {
        let f = fixture();

        let reply = f.handler.handle(command("set alarm http", true)).await;

        assert_eq!(reply, None);
        assert!(f.servers.resolve_trigger("guild-1", "alarm").is_none());
        assert_eq!(f.store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_set_succeeds_even_when_save_fails() {
        let f = fixture_with_store(RecordingStore {
            fail_saves: true,
            ..Default::default()
        });

        let reply = f
            .handler
            .handle(command("set alarm https://example.com/a.mp3", true))
            .await;

        // 持久化失败只记日志：注册依旧生效，确认照常发出
        let reply = reply.expect("confirmation expected");
        assert!(reply.contains("alarm"));
        assert_eq!(
            f.servers.resolve_trigger("guild-1", "alarm").as_deref(),
            Some("https://example.com/a.mp3")
        );
        assert_eq!(f.store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_raw_url_plays_without_registering() {
        let f = fixture();

        let reply = f
            .handler
            .handle(command("https://example.com/x.mp3", false))
            .await;

        assert_eq!(reply, None);
        assert_eq!(
            f.speech.spoken_urls(),
            vec!["https://example.com/x.mp3".to_string()]
        );
        assert_eq!(f.servers.trigger_count("guild-1"), 0);
        assert_eq!(f.store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_insecure_raw_url_rejected_without_playback() {
        let f = fixture();

        let reply = f
            .handler
            .handle(command("http://example.com/x.mp3", false))
            .await;

        assert_eq!(reply, Some(f.localizer.message(keys::SFX_NEEDS_HTTPS)));
        assert!(f.speech.spoken_urls().is_empty());
    }

    #[tokio::test]
    async fn test_registered_token_plays_with_user_settings() {
        let f = fixture();
        f.handler
            .handle(command("set alarm https://example.com/a.mp3", true))
            .await;
        f.servers.set_user_settings(
            "guild-1",
            "user-1",
            UserVoiceSettings {
                voice_id: Some("en-AU-Standard-A".to_string()),
                language_code: Some("en-AU".to_string()),
            },
        );

        let reply = f.handler.handle(command("alarm", false)).await;

        assert_eq!(reply, None);
        assert_eq!(
            f.speech.spoken_urls(),
            vec!["https://example.com/a.mp3".to_string()]
        );
        let (_, settings) = f.speech.spoken().pop().unwrap();
        assert_eq!(settings.voice_id.as_deref(), Some("en-AU-Standard-A"));
    }

    #[tokio::test]
    async fn test_unknown_token_is_silent() {
        let f = fixture();

        let reply = f.handler.handle(command("nothing", false)).await;

        assert_eq!(reply, None);
        assert!(f.speech.spoken_urls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_resolve_misses() {
        let f = fixture();
        f.handler
            .handle(command("set alarm https://example.com/a.mp3", true))
            .await;

        let reply = f.handler.handle(command("del alarm", true)).await;

        assert_eq!(reply, None);
        assert!(f.servers.resolve_trigger("guild-1", "alarm").is_none());
        // set + delete 各保存一次
        assert_eq!(f.store.save_count(), 2);
    }

    #[tokio::test]
    async fn test_delete_missing_token_is_idempotent() {
        let f = fixture();

        let reply = f.handler.handle(command("rm ghost", true)).await;

        assert_eq!(reply, None);
        assert_eq!(f.store.save_count(), 1);
    }

    #[tokio::test]
    async fn test_delete_with_wrong_verb_blocked() {
        let f = fixture();
        f.handler
            .handle(command("set alarm https://example.com/a.mp3", true))
            .await;

        let reply = f.handler.handle(command("nuke alarm", true)).await;

        assert_eq!(reply, Some(f.localizer.message(keys::SFX_BAD_DELETE)));
        assert!(f.servers.resolve_trigger("guild-1", "alarm").is_some());
    }

    #[tokio::test]
    async fn test_delete_without_capability_rejected() {
        let f = fixture();
        f.handler
            .handle(command("set alarm https://example.com/a.mp3", true))
            .await;

        let reply = f.handler.handle(command("del alarm", false)).await;

        assert_eq!(reply, Some(f.localizer.message(keys::SFX_NOT_PERMITTED)));
        assert!(f.servers.resolve_trigger("guild-1", "alarm").is_some());
    }

    #[tokio::test]
    async fn test_list_empty_and_populated() {
        let f = fixture();

        let reply = f.handler.handle(command("list", false)).await;
        assert_eq!(reply, Some(f.localizer.message(keys::SFX_LIST_NONE)));

        f.handler
            .handle(command("set zebra https://example.com/z.mp3", true))
            .await;
        f.handler
            .handle(command("set alarm https://example.com/a.mp3", true))
            .await;

        let reply = f.handler.handle(command("list", false)).await.unwrap();
        assert!(reply.starts_with("```"));
        assert!(reply.ends_with("```"));
        // 排序后 alarm 在 zebra 前
        let alarm_at = reply.find("alarm").unwrap();
        let zebra_at = reply.find("zebra").unwrap();
        assert!(alarm_at < zebra_at);
    }

    #[tokio::test]
    async fn test_usage_and_too_many_arguments() {
        let f = fixture();

        let reply = f.handler.handle(command("", false)).await;
        assert_eq!(reply, Some(f.localizer.message(keys::SFX_USAGE)));

        let reply = f
            .handler
            .handle(command("set a https://example.com/a.mp3 extra", true))
            .await;
        assert_eq!(reply, Some(f.localizer.message(keys::SFX_TOO_MANY)));
        assert_eq!(f.servers.trigger_count("guild-1"), 0);
    }
}
