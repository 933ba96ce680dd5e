//! 输入栏：任务内容 + expiry + Add 按钮

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::tail;
use crate::input_state::{Focus, InputState};
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

/// 输入栏高度
pub const INPUT_BAR_HEIGHT: u16 = 3;

const TASK_PLACEHOLDER: &str = "Enter a new task";
const EXPIRY_PLACEHOLDER: &str = "Expiry (YYYY-MM-DD HH:mm) optional";
const ADD_LABEL: &str = " Add ";

/// 渲染输入栏
pub fn render(
    frame: &mut Frame,
    area: Rect,
    input: &InputState,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let [task_area, expiry_area, button_area] = Layout::horizontal([
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Length(ADD_LABEL.len() as u16 + 2),
    ])
    .areas(area);

    render_field(
        frame,
        task_area,
        " Task ",
        &input.task,
        TASK_PLACEHOLDER,
        input.focus == Focus::Task,
        colors,
    );
    render_field(
        frame,
        expiry_area,
        " Expiry ",
        &input.expiry,
        EXPIRY_PLACEHOLDER,
        input.focus == Focus::Expiry,
        colors,
    );
    let add_area = render_add_button(frame, button_area, colors);

    click_areas.task_input = Some(task_area);
    click_areas.expiry_input = Some(expiry_area);
    click_areas.add_button = Some(add_area);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    colors: &ThemeColors,
) {
    let border_color = if focused { colors.highlight } else { colors.border };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(if focused { colors.highlight } else { colors.muted }))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if value.is_empty() && !focused {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(colors.muted),
        ))
    } else {
        // 留一列给光标
        let visible = tail(value, (inner.width as usize).saturating_sub(1));
        let mut spans = vec![Span::styled(visible, Style::default().fg(colors.text))];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(colors.highlight)));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line), inner);
}

/// 渲染 Add 按钮，返回按钮实际区域
fn render_add_button(frame: &mut Frame, area: Rect, colors: &ThemeColors) -> Rect {
    // 垂直居中，左侧留一列间距
    let button = Rect::new(
        area.x + 1,
        area.y + area.height.saturating_sub(1) / 2,
        area.width.saturating_sub(1),
        1.min(area.height),
    );

    let paragraph = Paragraph::new(ADD_LABEL)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(colors.button_fg)
                .bg(colors.button_bg)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(paragraph, button);
    button
}
