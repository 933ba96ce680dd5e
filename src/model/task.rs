use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 任务 ID（创建时分配，生命周期内稳定，永不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 单条待办任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// 任务内容（已 trim，非空）
    pub text: String,
    pub completed: bool,
    /// 创建时间，创建后不可变
    pub created_at: DateTime<Utc>,
    /// 过期时间，创建时必须晚于 created_at
    pub expiry: Option<DateTime<Utc>>,
}

impl Task {
    /// 创建新任务；调用方负责校验 text 非空、expiry 在 now 之后
    pub(crate) fn new(text: &str, now: DateTime<Utc>, expiry: Option<DateTime<Utc>>) -> Self {
        Self {
            id: TaskId::new(),
            text: text.to_string(),
            completed: false,
            created_at: now,
            expiry,
        }
    }

    /// 在 `now` 时刻是否可见（没有 expiry，或 now 严格早于 expiry）
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        match self.expiry {
            None => true,
            Some(expiry) => now < expiry,
        }
    }

    /// 切换完成状态
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
