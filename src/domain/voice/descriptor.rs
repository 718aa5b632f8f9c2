//! Voice Context - 语音描述符

/// 语音档次
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceTier {
    /// 标准合成
    Standard,
    /// WaveNet 高级合成
    WaveNet,
}

impl VoiceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceTier::Standard => "Standard",
            VoiceTier::WaveNet => "WaveNet",
        }
    }
}

impl std::fmt::Display for VoiceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 语音性别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "FEMALE",
            Gender::Male => "MALE",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单个语音合成选项的不可变描述
///
/// 不变量:
/// - voice_id 在整个目录内全局唯一
/// - alias 可为空、可重复，绝不作为主键使用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceDescriptor {
    /// 合成服务提供方
    pub provider: &'static str,
    /// 人类可读的语言名称，如 "English (Australia)"
    pub language_name: &'static str,
    /// 档次（Standard / WaveNet）
    pub tier: VoiceTier,
    /// BCP-47 风格的语言代码，如 "en-AU"
    pub language_code: &'static str,
    /// 供上游翻译步骤使用的两字母语言提示
    pub translate_hint: &'static str,
    /// 规范语音标识，目录内唯一
    pub voice_id: &'static str,
    /// 人类友好别名，可为空
    pub alias: &'static str,
    pub gender: Gender,
}
