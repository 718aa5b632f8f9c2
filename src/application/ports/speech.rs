//! Speech Port - 语音合成播放抽象
//!
//! 定义向外部合成/播放服务移交请求的接口，具体实现在
//! infrastructure/adapters 层。本核心只准备输入，不构造 SSML 文档。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// 合成播放错误
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Speech service error: {0}")]
    Service(String),
}

/// 可合成负载 - 一次播放请求指向的音频资源
#[derive(Debug, Clone)]
pub struct SpeechPayload {
    /// 关联 ID，用于日志追踪
    pub request_id: Uuid,
    /// 要播放的音频 URL
    pub audio_url: String,
}

impl SpeechPayload {
    /// 包装一个已解析出的音频 URL
    pub fn audio(url: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            audio_url: url.into(),
        }
    }
}

/// 用户语音偏好
///
/// 随播放请求一并移交给合成服务；未设置时由服务端取默认值
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserVoiceSettings {
    /// 首选语音标识
    pub voice_id: Option<String>,
    /// 首选语言代码
    pub language_code: Option<String>,
}

/// Speech Port
///
/// 播放是 fire-and-forget 移交：调用方不重试，失败只记日志
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// 移交一次播放请求
    async fn speak(
        &self,
        payload: SpeechPayload,
        settings: &UserVoiceSettings,
    ) -> Result<(), SpeechError>;

    /// 检查合成服务是否可用
    async fn health_check(&self) -> bool {
        true
    }
}
