//! Trigger Context - Value Objects

use serde::{Deserialize, Serialize};

use super::errors::TriggerError;

/// 安全传输协议前缀
///
/// 音频来源必须走 https，否则拒绝注册和播放
pub const SECURE_SCHEME_PREFIX: &str = "https";

/// URL 最小字符数
pub const MIN_URL_CHARS: usize = 5;

/// 判断整段文本是否呈 URL 形态（scheme + 带点号的 host）
///
/// 只做形态判断，不校验可达性：
/// - 必须包含 `://`，scheme 为纯 ASCII 字母
/// - host 非空且含 `.`
/// - 整体不含空白字符
pub fn is_url_shaped(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() || text.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((scheme, rest)) = text.split_once("://") else {
        return false;
    };
    if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    !host.is_empty() && host.contains('.')
}

/// 音频来源 URL
///
/// 不变量:
/// - 构造时至少 MIN_URL_CHARS 个字符
/// - 构造时以 https 前缀开头
/// - 构造之后视为不透明字符串，读取时不再校验
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioUrl(String);

impl AudioUrl {
    pub fn new(raw: impl Into<String>) -> Result<Self, TriggerError> {
        let raw = raw.into();
        if raw.chars().count() < MIN_URL_CHARS {
            return Err(TriggerError::UrlTooShort);
        }
        if !raw.starts_with(SECURE_SCHEME_PREFIX) {
            return Err(TriggerError::InsecureUrl);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for AudioUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
