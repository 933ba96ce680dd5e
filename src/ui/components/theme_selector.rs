//! 主题选择器组件

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};
use crate::theme::{Theme, ThemeColors};
use crate::ui::click_areas::ClickAreas;

/// 渲染主题选择器弹窗
pub fn render(
    frame: &mut Frame,
    selected_index: usize,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let themes = Theme::all();

    // 标题 + 边框 + 内容 + 提示
    let popup_area = center_dialog(frame.area(), 30, themes.len() as u16 + 4);
    let inner_area = render_dialog_frame(frame, popup_area, " Theme ", colors.highlight, colors);

    let [list_area, _, hint_area] = Layout::vertical([
        Constraint::Length(themes.len() as u16),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    let lines: Vec<Line> = themes
        .iter()
        .enumerate()
        .map(|(i, theme)| {
            let is_selected = i == selected_index;
            let prefix = if is_selected { "❯ " } else { "  " };
            let style = if is_selected {
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            Line::from(Span::styled(format!("{}{}", prefix, theme.label()), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), list_area);
    render_hint(frame, hint_area, &[("Enter", "select"), ("Esc", "cancel")], colors);

    // 注册点击区域
    click_areas.dialog_area = Some(popup_area);
    for i in 0..themes.len() {
        let row = list_area.y + i as u16;
        if row < list_area.y + list_area.height {
            click_areas
                .dialog_items
                .push((Rect::new(list_area.x, row, list_area.width, 1), i));
        }
    }
}
