//! Voice Queries

/// 按名称/别名精确查找语音
#[derive(Debug, Clone)]
pub struct FindVoiceByName {
    pub input: String,
}

/// 按语言代码子串查找语音
#[derive(Debug, Clone)]
pub struct FindVoiceByLanguage {
    pub input: String,
}
