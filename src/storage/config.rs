//! 应用配置持久化
//!
//! 只保存界面偏好（主题、时间格式、日志级别），任务本身从不落盘。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::taskman_dir;
use crate::error::Result;
use crate::model::expiry::is_valid_datetime_format;
use crate::model::DEFAULT_DATETIME_FORMAT;
use crate::theme::Theme;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// 主题配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: Theme::Auto.label().to_string(),
        }
    }
}

/// 显示配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// strftime 格式，用于创建时间和 expiry
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
}

fn default_datetime_format() -> String {
    DEFAULT_DATETIME_FORMAT.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            datetime_format: default_datetime_format(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// tracing EnvFilter 指令，如 "info"、"taskman=debug"
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

impl Config {
    /// 配置中的主题，未知名称退回 Auto
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme.name).unwrap_or_default()
    }

    /// 配置中的时间格式，无效时退回默认格式
    pub fn datetime_format(&self) -> &str {
        if is_valid_datetime_format(&self.display.datetime_format) {
            &self.display.datetime_format
        } else {
            DEFAULT_DATETIME_FORMAT
        }
    }

    /// 序列化为 TOML 文本
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// 获取默认配置文件路径
pub fn config_path() -> PathBuf {
    taskman_dir().join("config.toml")
}

/// 从指定路径加载配置（不存在则返回默认值）
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 保存配置到指定路径
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, config.to_toml()?)?;
    Ok(())
}
