//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Trigger Context: 服务器音频触发词注册表
//! - Voice Context: 只读语音目录

pub mod trigger;
pub mod voice;
