pub mod config;

use std::path::PathBuf;

/// 获取 ~/.taskman/ 目录路径（找不到 home 时退回当前目录）
pub fn taskman_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".taskman")
}
