use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::App;
use crate::input_state::Focus;
use crate::ui::click_areas::contains;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 轮询事件（100ms 超时），超时后主循环重新渲染，过期任务随之消失
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            // 只处理按下事件
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C 任何时候都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 优先处理弹窗事件
    if app.ui.alert.is_some() {
        handle_alert_key(app, key);
        return;
    }

    if app.ui.show_help {
        handle_help_key(app, key);
        return;
    }

    if app.ui.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    // 根据焦点分发事件
    if app.input.focus.is_input() {
        handle_input_key(app, key);
    } else {
        handle_list_key(app, key);
    }
}

/// 阻塞提示：只接受关闭操作
fn handle_alert_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.ui.dismiss_alert();
    }
}

fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
    ) {
        app.toggle_help();
    }
}

fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => app.ui.theme_selector_prev(),
        KeyCode::Char('j') | KeyCode::Down => app.ui.theme_selector_next(),
        KeyCode::Enter => app.theme_selector_confirm(),
        KeyCode::Esc | KeyCode::Char('q') => app.close_theme_selector(),
        _ => {}
    }
}

/// 输入框中的键盘事件
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.add_task(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Esc | KeyCode::Down => app.focus(Focus::List),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            app.input.push_char(c)
        }
        _ => {}
    }
}

/// 任务列表中的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 操作
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        // 焦点
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Char('n') => app.focus(Focus::Task),
        KeyCode::Char('e') => app.focus(Focus::Expiry),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),

        KeyCode::Char('t') => app.open_theme_selector(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}

/// 鼠标事件（点击区域来自上一帧渲染）
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, col, row),
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp if !app.ui.has_overlay() => {
            let in_list = app
                .ui
                .click_areas
                .list_area
                .is_some_and(|r| contains(&r, col, row));
            if in_list {
                if mouse.kind == MouseEventKind::ScrollDown {
                    app.select_next();
                } else {
                    app.select_previous();
                }
            }
        }
        _ => {}
    }
}

fn handle_click(app: &mut App, col: u16, row: u16) {
    // 阻塞提示：点击任意位置关闭
    if app.ui.alert.is_some() {
        app.ui.dismiss_alert();
        return;
    }

    if app.ui.show_help {
        app.toggle_help();
        return;
    }

    if app.ui.show_theme_selector {
        if let Some(idx) = app.ui.click_areas.dialog_item_at(col, row) {
            app.ui.theme_selector_index = idx;
            app.theme_selector_confirm();
        } else if !app
            .ui
            .click_areas
            .dialog_area
            .is_some_and(|r| contains(&r, col, row))
        {
            app.close_theme_selector();
        }
        return;
    }

    let areas = &app.ui.click_areas;
    if let Some(id) = areas.delete_button_at(col, row) {
        app.delete_task(id);
    } else if let Some(id) = areas.task_row_at(col, row) {
        app.selected = Some(id);
        app.focus(Focus::List);
        app.toggle_task(id);
    } else if areas.add_button.is_some_and(|r| contains(&r, col, row)) {
        app.add_task();
    } else if areas.task_input.is_some_and(|r| contains(&r, col, row)) {
        app.focus(Focus::Task);
    } else if areas.expiry_input.is_some_and(|r| contains(&r, col, row)) {
        app.focus(Focus::Expiry);
    }
}
