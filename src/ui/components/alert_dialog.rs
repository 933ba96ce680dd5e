//! 阻塞提示弹窗
//!
//! 校验失败（expiry 不在未来、无法解析）时显示，必须关闭后才能继续操作。

use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin},
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

const DIALOG_WIDTH: u16 = 46;

/// 渲染阻塞提示
pub fn render(frame: &mut Frame, message: &str, colors: &ThemeColors, click_areas: &mut ClickAreas) {
    // 窄终端上弹窗会被裁剪，行数按实际宽度计算
    // 内容区宽度 = 弹窗宽度 - 边框 - 左右留白
    let width = DIALOG_WIDTH.min(frame.area().width);
    let text_width = width.saturating_sub(4).max(1) as usize;
    let height = wrapped_line_count(message, text_width) + 6; // 边框 + 上下空行 + 提示行

    let area = center_dialog(frame.area(), DIALOG_WIDTH, height);
    let inner = render_dialog_frame(frame, area, " Notice ", colors.danger, colors);

    let [_, message_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let text = Paragraph::new(Line::from(message.to_string()))
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, message_area.inner(Margin::new(1, 0)));

    render_hint(frame, hint_area, &[("Enter", "OK")], colors);

    click_areas.dialog_area = Some(area);
}

/// 按单词折行后的行数，超长单词按宽度硬切
fn wrapped_line_count(text: &str, width: usize) -> u16 {
    let mut lines = 1u16;
    let mut current = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if current == 0 {
            current = len;
        } else if current + 1 + len <= width {
            current += 1 + len;
        } else {
            lines += 1;
            current = len;
        }
        while current > width {
            lines += 1;
            current -= width;
        }
    }
    lines
}
