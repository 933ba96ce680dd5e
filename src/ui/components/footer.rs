use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::input_state::Focus;
use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(frame: &mut Frame, area: Rect, focus: Focus, has_items: bool, colors: &ThemeColors) {
    let shortcuts = get_shortcuts(focus, has_items);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn get_shortcuts(focus: Focus, has_items: bool) -> Vec<(&'static str, &'static str)> {
    match focus {
        Focus::Task | Focus::Expiry => vec![
            ("Enter", "add"),
            ("Tab", "next"),
            ("Esc", "list"),
            ("^C", "quit"),
        ],
        Focus::List => {
            if has_items {
                vec![
                    ("j/k", "move"),
                    ("Space", "toggle"),
                    ("d", "delete"),
                    ("a", "add"),
                    ("t", "theme"),
                    ("?", "help"),
                    ("q", "quit"),
                ]
            } else {
                vec![("a", "add"), ("t", "theme"), ("?", "help"), ("q", "quit")]
            }
        }
    }
}
