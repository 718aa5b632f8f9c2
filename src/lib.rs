//! Chatvox - 聊天服务器音效与语音目录核心
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Trigger Context: 音效触发词注册表上下文
//! - Voice Context: 静态语音目录上下文
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SpeechPort, ServerStorePort, ServerManagerPort, LocalizerPort）
//! - Commands: CQRS 命令处理器（sfx 命令）
//! - Queries: CQRS 查询处理器（token 解析、语音目录查询）
//!
//! 基础设施层 (infrastructure/):
//! - Console: 行式本地派发器
//! - Memory: ServerManager 内存实现
//! - Persistence: Sled 触发词存储
//! - Adapters: Speech Client, Static Localizer

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
