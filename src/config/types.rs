//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 语音服务配置
    #[serde(default)]
    pub speech: SpeechConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 控制台会话配置
    #[serde(default)]
    pub console: ConsoleConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            speech: SpeechConfig::default(),
            storage: StorageConfig::default(),
            console: ConsoleConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 语音服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// 语音服务基础 URL
    #[serde(default = "default_speech_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_speech_timeout")]
    pub timeout_secs: u64,

    /// 干跑模式：不连接外部服务，播放只记录不发送
    #[serde(default)]
    pub dry_run: bool,
}

fn default_speech_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_speech_timeout() -> u64 {
    30
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            url: default_speech_url(),
            timeout_secs: default_speech_timeout(),
            dry_run: false,
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 触发词数据库路径
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

fn default_db_path() -> String {
    "data/servers.sled".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

/// 控制台会话配置
///
/// 本地运行时模拟一个固定的服务器与发送者身份
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// 模拟的服务器 ID
    #[serde(default = "default_server_id")]
    pub server_id: String,

    /// 模拟的用户 ID
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// 发送者是否具有服务器管理能力
    #[serde(default = "default_can_manage")]
    pub can_manage_server: bool,

    /// 命令前缀
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
}

fn default_server_id() -> String {
    "local".to_string()
}

fn default_user_id() -> String {
    "console".to_string()
}

fn default_can_manage() -> bool {
    true
}

fn default_command_prefix() -> String {
    "!".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            server_id: default_server_id(),
            user_id: default_user_id(),
            can_manage_server: default_can_manage(),
            command_prefix: default_command_prefix(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
