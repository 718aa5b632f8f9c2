//! Voice Context - 语音目录限界上下文
//!
//! 职责:
//! - 进程级只读语音目录
//! - 按名称/别名的精确查找
//! - 按语言代码的子串查找

mod catalog;
mod data;
mod descriptor;

pub use catalog::VoiceCatalog;
pub use descriptor::{Gender, VoiceDescriptor, VoiceTier};
