//! Recording Speech Client - 测试与 dry-run 用
//!
//! 不调用任何外部服务，只记录每次移交的负载

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{SpeechError, SpeechPayload, SpeechPort, UserVoiceSettings};

/// 记录型 Speech 客户端
#[derive(Default)]
pub struct RecordingSpeechClient {
    spoken: Mutex<Vec<(SpeechPayload, UserVoiceSettings)>>,
}

impl RecordingSpeechClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已记录的全部移交
    pub fn spoken(&self) -> Vec<(SpeechPayload, UserVoiceSettings)> {
        self.spoken.lock().expect("recording lock poisoned").clone()
    }

    /// 已记录的音频 URL，按移交顺序
    pub fn spoken_urls(&self) -> Vec<String> {
        self.spoken()
            .into_iter()
            .map(|(payload, _)| payload.audio_url)
            .collect()
    }
}

#[async_trait]
impl SpeechPort for RecordingSpeechClient {
    async fn speak(
        &self,
        payload: SpeechPayload,
        settings: &UserVoiceSettings,
    ) -> Result<(), SpeechError> {
        tracing::debug!(
            request_id = %payload.request_id,
            audio_url = %payload.audio_url,
            "RecordingSpeechClient: playback recorded"
        );
        self.spoken
            .lock()
            .expect("recording lock poisoned")
            .push((payload, settings.clone()));
        Ok(())
    }
}
