//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Speech、ServerStore、ServerManager、Localizer）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器

pub mod commands;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{SfxCommandHandler, SfxReply},
    Requester, SfxCommand,
};

pub use ports::{
    keys, registry_from_stored, LocalizerPort, ServerManagerPort, ServerState, ServerStorePort,
    SpeechError, SpeechPayload, SpeechPort, StoreError, StoredEntry, UserVoiceSettings,
};

pub use queries::{
    handlers::{
        FindVoiceByLanguageHandler, FindVoiceByNameHandler, ListTriggersHandler,
        ResolveTokenHandler, VoiceResponse,
    },
    FindVoiceByLanguage, FindVoiceByName, ListTriggers, ResolveToken,
};
