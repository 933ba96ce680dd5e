//! 系统深浅色主题检测

use std::process::Command;

/// 检测系统主题
///
/// 返回 `true` 表示深色模式，`false` 表示浅色模式。
/// 优先读取终端的 `COLORFGBG`，其次读取 macOS 的系统设置。
pub fn detect_system_theme() -> bool {
    if let Some(dark) = std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| dark_from_colorfgbg(&v))
    {
        return dark;
    }

    // AppleInterfaceStyle 存在且为 "Dark" 即深色模式；非 macOS 上命令失败
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(true) // 终端默认深色居多
}

/// 解析 `COLORFGBG`（形如 "15;0" 或 "0;default;15"），最后一段是背景色索引
fn dark_from_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_system_theme() {
        // 只是确保函数不会 panic
        let _is_dark = detect_system_theme();
    }

    #[test]
    fn test_colorfgbg() {
        assert_eq!(dark_from_colorfgbg("15;0"), Some(true));
        assert_eq!(dark_from_colorfgbg("0;15"), Some(false));
        assert_eq!(dark_from_colorfgbg("0;default;8"), Some(true));
        assert_eq!(dark_from_colorfgbg("default"), None);
    }
}
