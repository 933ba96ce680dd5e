use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// Header 总高度：上下边框 + 标题行
pub const HEADER_HEIGHT: u16 = 3;

/// 渲染顶部标题栏
pub fn render(frame: &mut Frame, area: Rect, visible: usize, done: usize, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let left = Span::styled(
        " 📝 Task Manager",
        Style::default()
            .fg(colors.title)
            .add_modifier(Modifier::BOLD),
    );

    let right = Span::styled(summary(visible, done), Style::default().fg(colors.muted));

    // 计算中间填充空格
    let total_width = inner_area.width as usize;
    let used_width = left.width() + right.width();
    let padding = " ".repeat(total_width.saturating_sub(used_width));

    let line = Line::from(vec![left, Span::raw(padding), right]);
    frame.render_widget(Paragraph::new(line), inner_area);
}

/// 右侧统计文字，如 "3 tasks · 1 done "
fn summary(visible: usize, done: usize) -> String {
    let noun = if visible == 1 { "task" } else { "tasks" };
    if done == 0 {
        format!("{} {} ", visible, noun)
    } else {
        format!("{} {} · {} done ", visible, noun, done)
    }
}
