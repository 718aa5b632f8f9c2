//! Trigger Context - 音频触发词限界上下文
//!
//! 职责:
//! - 单服务器 token → 音频 URL 绑定的注册表聚合
//! - sfx 命令原始参数的分类
//! - URL 形态与安全传输校验

mod aggregate;
mod errors;
mod request;
mod value_objects;

pub use aggregate::{TriggerEntry, TriggerRegistry};
pub use errors::TriggerError;
pub use request::{is_delete_verb, is_set_verb, parse_sfx_request, SfxRequest};
pub use value_objects::{is_url_shaped, AudioUrl, MIN_URL_CHARS, SECURE_SCHEME_PREFIX};
