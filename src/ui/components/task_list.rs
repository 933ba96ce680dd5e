//! 任务列表组件
//!
//! 每个任务占 2~3 行：内容、创建时间、可选的过期时间，任务之间空一行。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::truncate;
use crate::model::{format_timestamp, Task};
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

/// 右侧删除按钮宽度
const DELETE_WIDTH: u16 = 3;
/// 内容行前缀宽度（选择器 + 复选框）
const PREFIX_WIDTH: usize = 6;

/// 列表渲染参数
pub struct TaskListProps<'a> {
    pub tasks: &'a [&'a Task],
    pub selected: Option<usize>,
    pub focused: bool,
    pub datetime_format: &'a str,
}

/// 渲染任务列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    props: &TaskListProps,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let border_color = if props.focused { colors.highlight } else { colors.border };
    let block = Block::default()
        .title(" Tasks ")
        .title_style(Style::default().fg(colors.muted))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    click_areas.list_area = Some(inner);

    if inner.width <= DELETE_WIDTH || inner.height == 0 {
        return;
    }

    let heights: Vec<u16> = props.tasks.iter().map(|t| item_height(t)).collect();
    let start = props
        .selected
        .map(|sel| scroll_start(&heights, sel, inner.height))
        .unwrap_or(0);

    let bottom = inner.y + inner.height;
    let mut y = inner.y;
    for (idx, task) in props.tasks.iter().enumerate().skip(start) {
        if y >= bottom {
            break;
        }
        let content_height = (heights[idx] - 1).min(bottom - y);
        let row = Rect::new(inner.x, y, inner.width - DELETE_WIDTH, content_height);
        let delete = Rect::new(row.x + row.width, y, DELETE_WIDTH, content_height);

        let is_selected = props.selected == Some(idx);
        render_item(frame, row, task, is_selected, props, colors);
        render_delete(frame, delete, colors);

        click_areas.task_rows.push((row, task.id));
        click_areas.delete_buttons.push((delete, task.id));

        y = y.saturating_add(heights[idx]);
    }
}

fn render_item(
    frame: &mut Frame,
    area: Rect,
    task: &Task,
    is_selected: bool,
    props: &TaskListProps,
    colors: &ThemeColors,
) {
    let selector = if is_selected { "❯ " } else { "  " };
    let checkbox = if task.completed { "[x] " } else { "[ ] " };

    let mut text_style = if task.completed {
        Style::default()
            .fg(colors.completed)
            .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
    } else {
        Style::default().fg(colors.text)
    };
    if is_selected {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let max_text = (area.width as usize).saturating_sub(PREFIX_WIDTH);
    let indent = " ".repeat(PREFIX_WIDTH);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(selector, Style::default().fg(colors.highlight)),
            Span::styled(checkbox, Style::default().fg(colors.muted)),
            Span::styled(truncate(&task.text, max_text), text_style),
        ]),
        Line::from(Span::styled(
            format!("{}{}", indent, format_timestamp(task.created_at, props.datetime_format)),
            Style::default().fg(colors.muted),
        )),
    ];
    if let Some(expiry) = task.expiry {
        lines.push(Line::from(Span::styled(
            format!(
                "{}Expires: {}",
                indent,
                format_timestamp(expiry, props.datetime_format)
            ),
            Style::default().fg(colors.expiry),
        )));
    }

    let mut paragraph = Paragraph::new(lines);
    if is_selected && props.focused {
        paragraph = paragraph.style(Style::default().bg(colors.bg_secondary));
    }
    frame.render_widget(paragraph, area);
}

fn render_delete(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        " ✕ ",
        Style::default()
            .fg(colors.danger)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(paragraph, area);
}

/// 单个任务占用的行数（含下方空行）
fn item_height(task: &Task) -> u16 {
    if task.expiry.is_some() {
        4
    } else {
        3
    }
}

/// 计算滚动起点，保证选中项完整显示
fn scroll_start(heights: &[u16], selected: usize, available: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let selected = selected.min(heights.len() - 1);
    let mut start = 0;
    // 最后一行空行可以被截掉
    let span = |start: usize| -> u32 {
        heights[start..=selected].iter().map(|h| *h as u32).sum::<u32>() - 1
    };
    while start < selected && span(start) > available as u32 {
        start += 1;
    }
    start
}
