//! 任务列表页面渲染
//!
//! 每帧只采样一次当前时刻，所有组件共用同一个可见列表。

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;
use crate::input_state::Focus;

use super::components::{
    alert_dialog, empty_state, footer, header, help_panel, input_bar, task_list, theme_selector,
    toast,
};

/// 渲染整个页面
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.ui.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, input_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(input_bar::INPUT_BAR_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let now = app.now();
    let visible = app.tasks.visible(now);
    let done = visible.iter().filter(|t| t.completed).count();
    let click_areas = &mut app.ui.click_areas;

    header::render(frame, header_area, visible.len(), done, &colors);
    input_bar::render(frame, input_area, &app.input, &colors, click_areas);

    let list_focused = app.input.focus == Focus::List;
    let selected = app
        .selected
        .and_then(|id| visible.iter().position(|t| t.id == id));
    if visible.is_empty() {
        click_areas.list_area = Some(list_area);
        empty_state::render(frame, list_area, &colors);
    } else {
        let props = task_list::TaskListProps {
            tasks: &visible,
            selected,
            focused: list_focused,
            datetime_format: app.config.datetime_format(),
        };
        task_list::render(frame, list_area, &props, &colors, click_areas);
    }

    footer::render(frame, footer_area, app.input.focus, !visible.is_empty(), &colors);

    // 渲染 Toast
    if let Some(ref t) = app.ui.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, &colors);
        }
    }

    // 弹层：主题选择器 / 帮助 / 阻塞提示（最上层）
    if app.ui.show_theme_selector {
        theme_selector::render(frame, app.ui.theme_selector_index, &colors, click_areas);
    }
    if app.ui.show_help {
        help_panel::render(frame, &colors, click_areas);
    }
    if let Some(ref message) = app.ui.alert {
        alert_dialog::render(frame, message, &colors, click_areas);
    }
}
