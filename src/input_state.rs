//! 输入框状态管理
//!
//! 管理任务内容与 expiry 两个输入框，以及当前焦点所在位置。

/// 焦点位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// 任务内容输入框
    #[default]
    Task,
    /// Expiry 输入框
    Expiry,
    /// 任务列表
    List,
}

impl Focus {
    /// Tab 切换到下一个焦点
    pub fn next(&self) -> Self {
        match self {
            Focus::Task => Focus::Expiry,
            Focus::Expiry => Focus::List,
            Focus::List => Focus::Task,
        }
    }

    /// Shift+Tab 切换到上一个焦点
    pub fn prev(&self) -> Self {
        match self {
            Focus::Task => Focus::List,
            Focus::Expiry => Focus::Task,
            Focus::List => Focus::Expiry,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Focus::Task | Focus::Expiry)
    }
}

/// 输入框状态
#[derive(Debug, Default)]
pub struct InputState {
    /// 任务内容（原始输入）
    pub task: String,
    /// Expiry（原始输入）
    pub expiry: String,
    /// 当前焦点
    pub focus: Focus,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前焦点对应的输入框
    fn focused_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Task => Some(&mut self.task),
            Focus::Expiry => Some(&mut self.expiry),
            Focus::List => None,
        }
    }

    /// 在当前输入框追加字符
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.focused_mut() {
            field.push(c);
        }
    }

    /// 删除当前输入框最后一个字符
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_mut() {
            field.pop();
        }
    }

    /// 清空两个输入框
    pub fn clear(&mut self) {
        self.task.clear();
        self.expiry.clear();
    }
}
