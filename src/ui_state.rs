//! UI 状态管理
//!
//! 管理所有与 UI 显示相关的状态，包括主题、颜色、Toast、阻塞提示、点击区域等。

use std::time::{Duration, Instant};

use crate::theme::{Theme, ThemeColors};
use crate::ui::click_areas::ClickAreas;

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI 状态
#[derive(Debug)]
pub struct UiState {
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 阻塞提示（必须关闭后才能继续操作）
    pub alert: Option<String>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 是否显示帮助面板
    pub show_help: bool,
    /// 可点击区域缓存（每帧渲染时填充）
    pub click_areas: ClickAreas,
}

impl UiState {
    /// 创建新的 UI 状态
    pub fn new(theme: Theme, colors: ThemeColors) -> Self {
        Self {
            toast: None,
            alert: None,
            theme,
            colors,
            show_theme_selector: false,
            theme_selector_index: 0,
            show_help: false,
            click_areas: ClickAreas::default(),
        }
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>, duration: Duration) {
        self.toast = Some(Toast::new(message, duration));
    }

    /// 清除过期的 Toast
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// 显示阻塞提示
    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    /// 关闭阻塞提示
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// 是否有任何弹层遮挡主界面
    pub fn has_overlay(&self) -> bool {
        self.alert.is_some() || self.show_theme_selector || self.show_help
    }

    /// 切换主题选择器显示状态
    pub fn toggle_theme_selector(&mut self) {
        self.show_theme_selector = !self.show_theme_selector;
        if self.show_theme_selector {
            self.theme_selector_index = self.theme.index();
        }
    }

    /// 主题选择器上移
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + len - 1) % len;
    }

    /// 主题选择器下移
    pub fn theme_selector_next(&mut self) {
        self.theme_selector_index = (self.theme_selector_index + 1) % Theme::all().len();
    }

    /// 更新主题
    pub fn set_theme(&mut self, theme: Theme, colors: ThemeColors) {
        self.theme = theme;
        self.colors = colors;
    }
}
