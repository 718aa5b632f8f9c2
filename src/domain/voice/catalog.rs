//! Voice Context - 语音目录与查询
//!
//! 目录在进程启动时构建一次，全程只读；两条查询都是纯函数，
//! 目录规模在低三位数，不需要缓存。

use once_cell::sync::Lazy;

use super::data::builtin_voices;
use super::descriptor::VoiceDescriptor;

/// 进程级共享目录
static GLOBAL_CATALOG: Lazy<VoiceCatalog> = Lazy::new(VoiceCatalog::builtin);

/// 不可变语音目录
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    voices: Vec<VoiceDescriptor>,
}

impl VoiceCatalog {
    pub fn new(voices: Vec<VoiceDescriptor>) -> Self {
        Self { voices }
    }

    /// 内置的 Google 语音目录
    pub fn builtin() -> Self {
        Self::new(builtin_voices())
    }

    /// 进程级共享实例
    pub fn global() -> &'static VoiceCatalog {
        &GLOBAL_CATALOG
    }

    pub fn voices(&self) -> &[VoiceDescriptor] {
        &self.voices
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    /// 按名称精确查找
    ///
    /// 输入去首尾空白、忽略大小写后，与 voice_id 或 alias 相等即命中。
    /// 别名不唯一，可能返回多条；保持目录顺序，不去重。
    /// 空白输入永不命中（空别名不等于空输入）。
    pub fn find_by_name(&self, input: &str) -> Vec<&VoiceDescriptor> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.voices
            .iter()
            .filter(|v| {
                v.voice_id.trim().to_lowercase() == needle
                    || (!v.alias.is_empty() && v.alias.trim().to_lowercase() == needle)
            })
            .collect()
    }

    /// 按语言代码子串查找
    ///
    /// 忽略大小写的包含匹配；输入不足 2 个字符时一律不命中，
    /// 避免单字符输入几乎匹配全部代码。保持目录顺序。
    pub fn find_by_language_code(&self, input: &str) -> Vec<&VoiceDescriptor> {
        if input.chars().count() <= 1 {
            return Vec::new();
        }

        let needle = input.to_lowercase();
        self.voices
            .iter()
            .filter(|v| v.language_code.to_lowercase().contains(&needle))
            .collect()
    }
}
