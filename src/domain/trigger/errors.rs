//! Trigger Context - Domain Errors

use thiserror::Error;

/// 触发词领域错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriggerError {
    /// URL 不足最小长度
    #[error("audio url shorter than the minimum length")]
    UrlTooShort,

    /// URL 未使用安全传输协议
    #[error("audio url must start with https")]
    InsecureUrl,
}
