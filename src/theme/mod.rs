mod colors;
mod detect;

use ratatui::style::Color;

pub use colors::*;
pub use detect::detect_system_theme;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Auto,
    Dark,
    Light,
    Paper,
    Nord,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Auto => "Auto",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Paper => "Paper",
            Theme::Nord => "Nord",
        }
    }

    /// 所有主题列表
    pub fn all() -> &'static [Theme] {
        &[Theme::Auto, Theme::Dark, Theme::Light, Theme::Paper, Theme::Nord]
    }

    /// 从名称创建主题（用于配置加载），未知名称返回 None
    pub fn from_name(name: &str) -> Option<Self> {
        Theme::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(name.trim()))
    }

    /// 在 [`Theme::all`] 中的位置
    pub fn index(&self) -> usize {
        Theme::all().iter().position(|t| t == self).unwrap_or(0)
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中行等）
    pub bg_secondary: Color,
    /// 标题颜色
    pub title: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（创建时间、提示）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 已完成任务文字
    pub completed: Color,
    /// Expiry 标签
    pub expiry: Color,
    /// 删除按钮 / 错误
    pub danger: Color,
    /// Add 按钮前景色
    pub button_fg: Color,
    /// Add 按钮背景色
    pub button_bg: Color,
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Auto => {
            if detect_system_theme() {
                dark_colors()
            } else {
                light_colors()
            }
        }
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
        Theme::Paper => paper_colors(),
        Theme::Nord => nord_colors(),
    }
}
