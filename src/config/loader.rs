//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `CHATVOX_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `CHATVOX_SPEECH__URL=http://speech-server:8000`
/// - `CHATVOX_SPEECH__DRY_RUN=true`
/// - `CHATVOX_STORAGE__DB_PATH=/data/servers.sled`
/// - `CHATVOX_CONSOLE__CAN_MANAGE_SERVER=false`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("speech.url", "http://localhost:8000")?
        .set_default("speech.timeout_secs", 30)?
        .set_default("speech.dry_run", false)?
        .set_default("storage.db_path", "data/servers.sled")?
        .set_default("console.server_id", "local")?
        .set_default("console.user_id", "console")?
        .set_default("console.can_manage_server", true)?
        .set_default("console.command_prefix", "!")?
        .set_default("log.level", "info")?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: CHATVOX_
    // 层级分隔符: __ (双下划线)
    // 例如: CHATVOX_SPEECH__URL=http://speech-server:8000
    builder = builder.add_source(
        Environment::with_prefix("CHATVOX")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if !config.speech.dry_run && config.speech.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Speech URL cannot be empty".to_string(),
        ));
    }

    if config.storage.db_path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Storage db_path cannot be empty".to_string(),
        ));
    }

    if config.console.server_id.is_empty() {
        return Err(ConfigError::ValidationError(
            "Console server_id cannot be empty".to_string(),
        ));
    }

    if config.console.command_prefix.is_empty() {
        return Err(ConfigError::ValidationError(
            "Command prefix cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Speech URL: {}", config.speech.url);
    tracing::info!("Speech Timeout: {}s", config.speech.timeout_secs);
    tracing::info!("Dry Run: {}", config.speech.dry_run);
    tracing::info!("Database: {}", config.storage.db_path);
    tracing::info!("Console Server: {}", config.console.server_id);
    tracing::info!("Console User: {}", config.console.user_id);
    tracing::info!("Can Manage Server: {}", config.console.can_manage_server);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
