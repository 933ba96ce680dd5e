//! 日志初始化
//!
//! TUI 独占 stdout，所以日志写入 ~/.taskman/taskman.log。

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, TaskError};
use crate::storage::config::LogConfig;
use crate::storage::taskman_dir;

/// 覆盖日志级别的环境变量
pub const LOG_ENV: &str = "TASKMAN_LOG";

/// 默认日志文件路径
pub fn log_path() -> PathBuf {
    taskman_dir().join("taskman.log")
}

/// 构建过滤器：环境变量优先，其次是配置
fn build_filter(level: &str, env_override: Option<String>) -> Result<EnvFilter> {
    let directive = env_override.unwrap_or_else(|| level.to_string());
    EnvFilter::try_new(&directive)
        .map_err(|e| TaskError::config(format!("invalid log level \"{}\": {}", directive, e)))
}

/// 初始化全局 tracing subscriber
pub fn init(config: &LogConfig, path: &Path) -> Result<()> {
    let filter = build_filter(&config.level, std::env::var(LOG_ENV).ok())?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| TaskError::config(e.to_string()))
}
