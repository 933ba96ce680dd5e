//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        title: Color::Rgb(150, 160, 230),
        highlight: Color::Rgb(120, 135, 220),
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),
        border: Color::Rgb(68, 68, 68),
        completed: Color::Rgb(100, 100, 100),
        expiry: Color::Rgb(240, 150, 70), // 橙色
        danger: Color::Rgb(255, 85, 85),
        button_fg: Color::Black,
        button_bg: Color::Rgb(120, 135, 220),
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),
        bg_secondary: Color::Rgb(230, 230, 230),
        title: Color::Rgb(34, 34, 59),
        highlight: Color::Rgb(95, 108, 175),
        text: Color::Rgb(30, 30, 30),
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        completed: Color::Rgb(173, 181, 189),
        expiry: Color::Rgb(200, 110, 20),
        danger: Color::Rgb(200, 50, 50),
        button_fg: Color::White,
        button_bg: Color::Rgb(95, 108, 175),
    }
}

/// Paper 主题（柔和灰底 + 靛蓝按钮）
pub fn paper_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(233, 236, 239),           // #e9ecef
        bg_secondary: Color::Rgb(255, 255, 255), // 卡片白
        title: Color::Rgb(34, 34, 59),           // #22223b
        highlight: Color::Rgb(95, 108, 175),     // #5f6caf
        text: Color::Rgb(34, 34, 59),
        muted: Color::Rgb(134, 142, 150),     // #868e96
        border: Color::Rgb(222, 226, 230),    // #dee2e6
        completed: Color::Rgb(173, 181, 189), // #adb5bd
        expiry: Color::Rgb(230, 126, 34),     // #e67e22
        danger: Color::Rgb(244, 67, 54),      // #f44336
        button_fg: Color::White,
        button_bg: Color::Rgb(95, 108, 175),
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),
        bg_secondary: Color::Rgb(59, 66, 82),
        title: Color::Rgb(136, 192, 208),
        highlight: Color::Rgb(136, 192, 208),
        text: Color::Rgb(236, 239, 244),
        muted: Color::Rgb(129, 161, 193),
        border: Color::Rgb(76, 86, 106),
        completed: Color::Rgb(97, 110, 136),
        expiry: Color::Rgb(208, 135, 112),
        danger: Color::Rgb(191, 97, 106),
        button_fg: Color::Rgb(46, 52, 64),
        button_bg: Color::Rgb(136, 192, 208),
    }
}
