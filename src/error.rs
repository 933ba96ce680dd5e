//! taskman 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// taskman 错误类型
#[derive(Debug, Error)]
pub enum TaskError {
    /// I/O 错误（配置文件、日志文件读写等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Expiry 输入无法解析
    #[error("Could not understand expiry \"{input}\". Use YYYY-MM-DD HH:mm.")]
    InvalidExpiry { input: String },

    /// Expiry 不在未来
    #[error("Expiry date/time must be in the future.")]
    ExpiryNotInFuture { expiry: DateTime<Utc> },
}

/// taskman Result 类型别名
pub type Result<T> = std::result::Result<T, TaskError>;

impl TaskError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 创建 InvalidExpiry 错误
    pub fn invalid_expiry(input: impl Into<String>) -> Self {
        Self::InvalidExpiry {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskError::invalid_expiry("tomorrow-ish");
        assert_eq!(
            err.to_string(),
            "Could not understand expiry \"tomorrow-ish\". Use YYYY-MM-DD HH:mm."
        );

        let err = TaskError::ExpiryNotInFuture {
            expiry: Utc::now(),
        };
        assert_eq!(err.to_string(), "Expiry date/time must be in the future.");

        let err = TaskError::config("bad level");
        assert_eq!(err.to_string(), "Config error: bad level");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: TaskError = io_err.into();
        assert!(matches!(err, TaskError::Io(_)));
    }
}
