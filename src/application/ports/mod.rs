//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod localization;
mod server_manager;
mod server_store;
mod speech;

pub use localization::{keys, LocalizerPort};
pub use server_manager::{registry_from_stored, ServerManagerPort, ServerState};
pub use server_store::{ServerStorePort, StoreError, StoredEntry};
pub use speech::{SpeechError, SpeechPayload, SpeechPort, UserVoiceSettings};
