//! Voice Query Handlers

use crate::application::queries::{FindVoiceByLanguage, FindVoiceByName};
use crate::domain::voice::{VoiceCatalog, VoiceDescriptor};

// ============================================================================
// Response DTOs
// ============================================================================

/// 语音详情响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceResponse {
    pub provider: String,
    pub language_name: String,
    pub tier: String,
    pub language_code: String,
    pub translate_hint: String,
    pub voice_id: String,
    pub alias: String,
    pub gender: String,
}

impl From<&VoiceDescriptor> for VoiceResponse {
    fn from(v: &VoiceDescriptor) -> Self {
        Self {
            provider: v.provider.to_string(),
            language_name: v.language_name.to_string(),
            tier: v.tier.as_str().to_string(),
            language_code: v.language_code.to_string(),
            translate_hint: v.translate_hint.to_string(),
            voice_id: v.voice_id.to_string(),
            alias: v.alias.to_string(),
            gender: v.gender.as_str().to_string(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// FindVoiceByName Handler
pub struct FindVoiceByNameHandler {
    catalog: &'static VoiceCatalog,
}

impl FindVoiceByNameHandler {
    pub fn new() -> Self {
        Self {
            catalog: VoiceCatalog::global(),
        }
    }

    pub fn handle(&self, query: FindVoiceByName) -> Vec<VoiceResponse> {
        self.catalog
            .find_by_name(&query.input)
            .into_iter()
            .map(VoiceResponse::from)
            .collect()
    }
}

impl Default for FindVoiceByNameHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// FindVoiceByLanguage Handler
pub struct FindVoiceByLanguageHandler {
    catalog: &'static VoiceCatalog,
}

impl FindVoiceByLanguageHandler {
    pub fn new() -> Self {
        Self {
            catalog: VoiceCatalog::global(),
        }
    }

    pub fn handle(&self, query: FindVoiceByLanguage) -> Vec<VoiceResponse> {
        self.catalog
            .find_by_language_code(&query.input)
            .into_iter()
            .map(VoiceResponse::from)
            .collect()
    }
}

impl Default for FindVoiceByLanguageHandler {
    fn default() -> Self {
        Self::new()
    }
}
