//! HTTP Speech Client - 调用外部合成/播放 HTTP 服务
//!
//! 实现 SpeechPort trait，通过 HTTP 把播放请求移交给外部服务
//!
//! 外部 API:
//! POST {base}/api/speech/say
//! Request: {"request_id": "...", "audio_url": "https://...",
//!           "voice": "...", "language": "..."}  (JSON)

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SpeechError, SpeechPayload, SpeechPort, UserVoiceSettings};

/// 播放请求体 (JSON)
#[derive(Debug, Serialize)]
struct SpeechHttpRequest<'a> {
    request_id: String,
    /// 要播放的音频 URL，由服务端包装为 SSML
    audio_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

/// HTTP Speech 客户端配置
#[derive(Debug, Clone)]
pub struct HttpSpeechClientConfig {
    /// 合成服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpSpeechClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpSpeechClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP Speech 客户端
pub struct HttpSpeechClient {
    client: Client,
    config: HttpSpeechClientConfig,
}

impl HttpSpeechClient {
    pub fn new(config: HttpSpeechClientConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SpeechError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn say_url(&self) -> String {
        format!("{}/api/speech/say", self.config.base_url)
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url)
    }
}

#[async_trait]
impl SpeechPort for HttpSpeechClient {
    async fn speak(
        &self,
        payload: SpeechPayload,
        settings: &UserVoiceSettings,
    ) -> Result<(), SpeechError> {
        let request = SpeechHttpRequest {
            request_id: payload.request_id.to_string(),
            audio_url: &payload.audio_url,
            voice: settings.voice_id.as_deref(),
            language: settings.language_code.as_deref(),
        };

        tracing::debug!(
            url = %self.say_url(),
            request_id = %request.request_id,
            audio_url = %request.audio_url,
            "Sending speech request"
        );

        let response = self
            .client
            .post(self.say_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechError::Timeout
                } else if e.is_connect() {
                    SpeechError::Network(format!("Cannot connect to speech service: {}", e))
                } else {
                    SpeechError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SpeechError::Service(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        tracing::info!(request_id = %payload.request_id, "Playback handed off");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpSpeechClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpSpeechClientConfig::new("http://example.com:9000").with_timeout(60);
        assert_eq!(config.base_url, "http://example.com:9000");
        assert_eq!(config.timeout_secs, 60);
    }
}
