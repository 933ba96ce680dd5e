use ratatui::layout::Rect;

use crate::model::TaskId;

/// 每帧渲染时缓存的可点击区域
#[derive(Debug, Default, Clone)]
pub struct ClickAreas {
    /// 任务行 (区域, 任务 id)
    pub task_rows: Vec<(Rect, TaskId)>,
    /// 删除按钮 (区域, 任务 id)
    pub delete_buttons: Vec<(Rect, TaskId)>,
    /// 任务列表区域（滚轮检测）
    pub list_area: Option<Rect>,
    /// 任务内容输入框
    pub task_input: Option<Rect>,
    /// Expiry 输入框
    pub expiry_input: Option<Rect>,
    /// Add 按钮
    pub add_button: Option<Rect>,
    /// 弹窗区域（点击外部关闭）
    pub dialog_area: Option<Rect>,
    /// 弹窗内可选项 (区域, 选项索引)
    pub dialog_items: Vec<(Rect, usize)>,
}

impl ClickAreas {
    pub fn reset(&mut self) {
        self.task_rows.clear();
        self.delete_buttons.clear();
        self.list_area = None;
        self.task_input = None;
        self.expiry_input = None;
        self.add_button = None;
        self.dialog_area = None;
        self.dialog_items.clear();
    }

    /// 命中的删除按钮
    pub fn delete_button_at(&self, col: u16, row: u16) -> Option<TaskId> {
        self.delete_buttons
            .iter()
            .find(|(rect, _)| contains(rect, col, row))
            .map(|(_, id)| *id)
    }

    /// 命中的任务行
    pub fn task_row_at(&self, col: u16, row: u16) -> Option<TaskId> {
        self.task_rows
            .iter()
            .find(|(rect, _)| contains(rect, col, row))
            .map(|(_, id)| *id)
    }

    /// 命中的弹窗选项
    pub fn dialog_item_at(&self, col: u16, row: u16) -> Option<usize> {
        self.dialog_items
            .iter()
            .find(|(rect, _)| contains(rect, col, row))
            .map(|(_, idx)| *idx)
    }
}

/// 检查坐标 (col, row) 是否在 Rect 内
pub fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}
