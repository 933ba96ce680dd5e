//! 任务集合
//!
//! 持有权威任务列表，并在每次渲染时派生出按时间过滤后的可见列表。
//! 所有修改操作都以 *当前可见列表* 为基础重新提交，因此已过期但尚未被
//! 删除的任务会在下一次任意修改时被永久丢弃。

use chrono::{DateTime, Utc};

use super::expiry::parse_expiry;
use super::task::{Task, TaskId};
use crate::error::{Result, TaskError};

/// 添加任务的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// 新建成功
    Added(TaskId),
    /// 文本为空，静默忽略
    Ignored,
}

/// 权威任务集合（插入顺序即显示顺序）
#[derive(Debug, Clone, Default)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近一次提交的权威列表（可能包含已过期任务）
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// `now` 时刻的可见列表（纯投影，不修改状态）
    pub fn visible(&self, now: DateTime<Utc>) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_visible_at(now)).collect()
    }

    /// 添加任务（原始输入）
    ///
    /// 文本 trim 后为空时返回 [`AddOutcome::Ignored`]；expiry 无法解析或不晚于
    /// `now` 时返回错误，且不修改集合。
    pub fn add(&mut self, text: &str, expiry_input: &str, now: DateTime<Utc>) -> Result<AddOutcome> {
        if text.trim().is_empty() {
            return Ok(AddOutcome::Ignored);
        }
        let expiry = parse_expiry(expiry_input)?;
        self.add_with_expiry(text, expiry, now)
    }

    /// 添加任务（已解析的 expiry）
    pub fn add_with_expiry(
        &mut self,
        text: &str,
        expiry: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<AddOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(AddOutcome::Ignored);
        }
        if let Some(expiry) = expiry {
            if expiry <= now {
                return Err(TaskError::ExpiryNotInFuture { expiry });
            }
        }

        let task = Task::new(text, now, expiry);
        let id = task.id;
        let mut next = self.rebase(now);
        next.push(task);
        self.commit(next);
        tracing::info!(task_id = %id, has_expiry = expiry.is_some(), "task added");
        Ok(AddOutcome::Added(id))
    }

    /// 切换完成状态；id 不存在时为 no-op，返回 false
    pub fn toggle(&mut self, id: TaskId, now: DateTime<Utc>) -> bool {
        let mut next = self.rebase(now);
        let found = match next.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.toggle();
                tracing::info!(task_id = %id, completed = task.completed, "task toggled");
                true
            }
            None => false,
        };
        self.commit(next);
        found
    }

    /// 删除任务；id 不存在时为 no-op，返回 None
    pub fn delete(&mut self, id: TaskId, now: DateTime<Utc>) -> Option<Task> {
        let mut next = self.rebase(now);
        let removed = next
            .iter()
            .position(|t| t.id == id)
            .map(|idx| next.remove(idx));
        if removed.is_some() {
            tracing::info!(task_id = %id, "task deleted");
        }
        self.commit(next);
        removed
    }

    /// 以可见列表为基础构建新的集合
    fn rebase(&self, now: DateTime<Utc>) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_visible_at(now))
            .cloned()
            .collect()
    }

    /// 提交为新的权威列表
    fn commit(&mut self, next: Vec<Task>) {
        let kept = next.len();
        let previous = std::mem::replace(&mut self.tasks, next);
        let pruned = previous
            .iter()
            .filter(|old| !self.tasks.iter().any(|t| t.id == old.id))
            .count();
        if pruned > 0 {
            tracing::debug!(pruned, kept, "committed task list");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn base_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-19T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn added(outcome: Result<AddOutcome>) -> TaskId {
        match outcome {
            Ok(AddOutcome::Added(id)) => id,
            other => panic!("expected Added, got {:?}", other),
        }
    }

    #[test]
    fn test_add_without_expiry() {
        let now = base_time();
        let mut tasks = TaskCollection::new();

        let id = added(tasks.add("Buy milk", "", now));

        let visible = tasks.visible(now);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, id);
        assert_eq!(visible[0].text, "Buy milk");
        assert!(!visible[0].completed);
        assert_eq!(visible[0].expiry, None);
        assert_eq!(visible[0].created_at, now);
    }

    #[test]
    fn test_add_trims_text() {
        let now = base_time();
        let mut tasks = TaskCollection::new();
        added(tasks.add("  Walk dog \t", "", now));
        assert_eq!(tasks.all()[0].text, "Walk dog");
    }

    #[test]
    fn test_blank_text_is_ignored() {
        let now = base_time();
        let mut tasks = TaskCollection::new();
        added(tasks.add("keep", "", now));

        for blank in ["", "   ", "\t\n"] {
            let outcome = tasks.add(blank, "", now).unwrap();
            assert_eq!(outcome, AddOutcome::Ignored);
        }
        assert_eq!(tasks.all().len(), 1);
    }

    #[test]
    fn test_blank_text_wins_over_bad_expiry() {
        let now = base_time();
        let mut tasks = TaskCollection::new();
        let outcome = tasks.add("  ", "garbage", now).unwrap();
        assert_eq!(outcome, AddOutcome::Ignored);
    }

    #[test]
    fn test_future_expiry_is_stored() {
        let now = base_time();
        let expiry = now + Duration::minutes(1);
        let mut tasks = TaskCollection::new();

        let input = expiry.to_rfc3339();
        added(tasks.add("Call mom", &input, now));
        assert_eq!(tasks.all()[0].expiry, Some(expiry));
    }

    #[test]
    fn test_past_or_present_expiry_is_rejected() {
        let now = base_time();
        let mut tasks = TaskCollection::new();

        for expiry in [now, now - Duration::seconds(1), now - Duration::days(3)] {
            let err = tasks
                .add_with_expiry("Too late", Some(expiry), now)
                .unwrap_err();
            assert!(matches!(err, TaskError::ExpiryNotInFuture { .. }));
        }
        assert!(tasks.all().is_empty());
    }

    #[test]
    fn test_unparseable_expiry_is_rejected() {
        let now = base_time();
        let mut tasks = TaskCollection::new();
        let err = tasks.add("Task", "next tuesday", now).unwrap_err();
        assert!(matches!(err, TaskError::InvalidExpiry { .. }));
        assert!(tasks.all().is_empty());
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let now = base_time();
        let mut tasks = TaskCollection::new();
        added(tasks.add("first", "", now));
        added(tasks.add("second", "", now));
        added(tasks.add("third", "", now));

        let texts: Vec<&str> = tasks.visible(now).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let now = base_time();
        let mut tasks = TaskCollection::new();
        let id = added(tasks.add("Buy milk", "", now));

        assert!(tasks.toggle(id, now));
        assert!(tasks.all()[0].completed);
        assert!(tasks.toggle(id, now));
        assert!(!tasks.all()[0].completed);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let now = base_time();
        let mut tasks = TaskCollection::new();
        added(tasks.add("Buy milk", "", now));

        let stranger = TaskId::new();
        assert!(!tasks.toggle(stranger, now));
        assert!(tasks.delete(stranger, now).is_none());
        assert_eq!(tasks.all().len(), 1);
        assert!(!tasks.all()[0].completed);
    }

    #[test]
    fn test_delete_only_task() {
        let now = base_time();
        let mut tasks = TaskCollection::new();
        let id = added(tasks.add("Buy milk", "", now));

        let removed = tasks.delete(id, now).unwrap();
        assert_eq!(removed.text, "Buy milk");
        assert!(tasks.visible(now).is_empty());
        assert!(tasks.all().is_empty());
    }

    #[test]
    fn test_expired_task_hidden_but_still_stored() {
        let now = base_time();
        let mut tasks = TaskCollection::new();
        added(tasks.add_with_expiry("Call mom", Some(now + Duration::minutes(1)), now));

        let later = now + Duration::minutes(2);
        assert!(tasks.visible(later).is_empty());
        // 没有修改操作之前仍留在权威列表中
        assert_eq!(tasks.all().len(), 1);
    }

    #[test]
    fn test_unrelated_mutation_prunes_expired() {
        let now = base_time();
        let mut tasks = TaskCollection::new();
        added(tasks.add_with_expiry("Call mom", Some(now + Duration::minutes(1)), now));
        let keep = added(tasks.add("Buy milk", "", now));

        let later = now + Duration::minutes(5);
        assert!(tasks.toggle(keep, later));
        assert_eq!(tasks.all().len(), 1);
        assert_eq!(tasks.all()[0].text, "Buy milk");

        // 即使 toggle 的 id 不存在，也会提交过滤后的列表
        let mut tasks = TaskCollection::new();
        added(tasks.add_with_expiry("Call mom", Some(now + Duration::minutes(1)), now));
        assert!(!tasks.toggle(TaskId::new(), later));
        assert!(tasks.all().is_empty());
    }

    #[test]
    fn test_add_prunes_expired() {
        let now = base_time();
        let mut tasks = TaskCollection::new();
        added(tasks.add_with_expiry("Soon", Some(now + Duration::seconds(30)), now));

        let later = now + Duration::minutes(1);
        added(tasks.add("Fresh", "", later));
        let texts: Vec<&str> = tasks.all().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Fresh"]);
    }

    #[test]
    fn test_expired_task_cannot_be_toggled_or_deleted() {
        let now = base_time();
        let mut tasks = TaskCollection::new();
        let id = added(tasks.add_with_expiry("Soon", Some(now + Duration::seconds(30)), now));

        let later = now + Duration::minutes(1);
        assert!(tasks.visible(later).iter().all(|t| t.id != id));
        assert!(tasks.delete(id, later).is_none());
        assert!(tasks.all().is_empty());
    }
}
