/// 截断字符串到指定最大长度，超出部分用省略号替代
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len == 0 {
        String::new()
    } else {
        format!("{}…", s.chars().take(max_len - 1).collect::<String>())
    }
}

/// 只保留字符串末尾的 `max_len` 个字符（输入框内容超出宽度时显示光标附近的部分）
pub fn tail(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    s.chars().skip(count.saturating_sub(max_len)).collect()
}

pub mod alert_dialog;
pub mod dialog_utils;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod input_bar;
pub mod task_list;
pub mod theme_selector;
pub mod toast;
