use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error::TaskError;
use crate::input_state::{Focus, InputState};
use crate::model::{AddOutcome, Clock, SystemClock, Task, TaskCollection, TaskId};
use crate::storage::config::{save_config_to, Config};
use crate::theme::{get_theme_colors, Theme};
use crate::ui_state::UiState;

/// Toast 默认显示时长
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// 全局应用状态（Task List View）
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 权威任务集合
    pub tasks: TaskCollection,
    /// 输入框状态
    pub input: InputState,
    /// 选中的任务（按 id 记录，前面的任务过期后仍指向同一条）
    pub selected: Option<TaskId>,
    /// UI 状态
    pub ui: UiState,
    /// 当前配置
    pub config: Config,
    /// 配置文件路径（None 表示不持久化）
    config_path: Option<PathBuf>,
    /// 时间来源
    clock: Box<dyn Clock>,
}

impl App {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self::with_clock(config, config_path, Box::new(SystemClock))
    }

    pub fn with_clock(config: Config, config_path: Option<PathBuf>, clock: Box<dyn Clock>) -> Self {
        let theme = config.theme();
        let colors = get_theme_colors(theme);

        Self {
            should_quit: false,
            tasks: TaskCollection::new(),
            input: InputState::new(),
            selected: None,
            ui: UiState::new(theme, colors),
            config,
            config_path,
            clock,
        }
    }

    /// 当前时刻
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// `now` 时刻的可见任务
    pub fn visible_tasks(&self, now: DateTime<Utc>) -> Vec<&Task> {
        self.tasks.visible(now)
    }

    /// 选中任务在 `now` 时刻可见列表中的位置；选中任务已过期时为 None
    pub fn selected_index(&self, now: DateTime<Utc>) -> Option<usize> {
        let id = self.selected?;
        self.tasks.visible(now).iter().position(|t| t.id == id)
    }

    /// 当前选中且仍然可见的任务 id
    pub fn selected_task_id(&self, now: DateTime<Utc>) -> Option<TaskId> {
        self.selected_index(now).and(self.selected)
    }

    // ========== 三个用户操作 ==========

    /// 用输入框内容添加任务
    pub fn add_task(&mut self) {
        let now = self.now();
        match self.tasks.add(&self.input.task, &self.input.expiry, now) {
            Ok(AddOutcome::Added(id)) => {
                self.input.clear();
                self.input.focus = Focus::Task;
                self.selected = Some(id);
                self.ui.show_toast("Task added", TOAST_DURATION);
            }
            Ok(AddOutcome::Ignored) => {}
            Err(e) => {
                match &e {
                    TaskError::ExpiryNotInFuture { expiry } => {
                        tracing::warn!(%expiry, %now, "task rejected: expiry not in the future")
                    }
                    TaskError::InvalidExpiry { input } => {
                        tracing::warn!(%input, "task rejected: unparseable expiry")
                    }
                    other => tracing::error!(error = %other, "failed to add task"),
                }
                self.ui.show_alert(e.to_string());
            }
        }
    }

    /// 切换任务完成状态
    pub fn toggle_task(&mut self, id: TaskId) {
        let now = self.now();
        self.tasks.toggle(id, now);
    }

    /// 删除任务；删除的是选中任务时，选中项移到原位置上的相邻任务
    pub fn delete_task(&mut self, id: TaskId) {
        let now = self.now();
        let was_selected_at = self
            .selected_index(now)
            .filter(|_| self.selected == Some(id));

        if self.tasks.delete(id, now).is_some() {
            self.ui.show_toast("Task deleted", TOAST_DURATION);
        }

        if let Some(idx) = was_selected_at {
            let visible = self.tasks.visible(now);
            self.selected = visible
                .get(idx)
                .or_else(|| visible.last())
                .map(|t| t.id);
        }
    }

    /// 切换选中任务
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id(self.now()) {
            self.toggle_task(id);
        }
    }

    /// 删除选中任务
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id(self.now()) {
            self.delete_task(id);
        }
    }

    // ========== 列表导航 ==========

    /// 选中下一项
    pub fn select_next(&mut self) {
        let now = self.now();
        let current = self.selected_index(now);
        let visible = self.tasks.visible(now);
        if visible.is_empty() {
            return;
        }
        let next = current.map_or(0, |i| (i + 1) % visible.len());
        self.selected = Some(visible[next].id);
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let now = self.now();
        let current = self.selected_index(now);
        let visible = self.tasks.visible(now);
        if visible.is_empty() {
            return;
        }
        let prev = match current {
            Some(0) | None => visible.len() - 1,
            Some(i) => i - 1,
        };
        self.selected = Some(visible[prev].id);
    }

    /// 选中任务不可见时退回第一条可见任务
    fn ensure_selection(&mut self, now: DateTime<Utc>) {
        if self.selected_index(now).is_none() {
            self.selected = self.tasks.visible(now).first().map(|t| t.id);
        }
    }

    // ========== 焦点 ==========

    pub fn focus(&mut self, focus: Focus) {
        self.input.focus = focus;
        if focus == Focus::List {
            self.ensure_selection(self.now());
        }
    }

    pub fn focus_next(&mut self) {
        self.focus(self.input.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.focus(self.input.focus.prev());
    }

    // ========== 主题 ==========

    pub fn open_theme_selector(&mut self) {
        self.ui.toggle_theme_selector();
    }

    pub fn close_theme_selector(&mut self) {
        self.ui.show_theme_selector = false;
    }

    /// 应用选中的主题并写入配置
    pub fn theme_selector_confirm(&mut self) {
        let theme = Theme::all()
            .get(self.ui.theme_selector_index)
            .copied()
            .unwrap_or_default();
        self.ui.set_theme(theme, get_theme_colors(theme));
        self.ui.show_theme_selector = false;
        self.config.theme.name = theme.label().to_string();

        if let Some(path) = &self.config_path {
            match save_config_to(path, &self.config) {
                Ok(()) => tracing::info!(theme = theme.label(), "theme saved"),
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(), "failed to save config");
                    self.ui
                        .show_toast(format!("Failed to save config: {}", e), TOAST_DURATION);
                }
            }
        }
    }

    // ========== 其他 ==========

    pub fn toggle_help(&mut self) {
        self.ui.show_help = !self.ui.show_help;
    }

    /// 更新 Toast 状态（清除过期的）
    pub fn update_toast(&mut self) {
        self.ui.clear_expired_toast();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::clock::ManualClock;
    use chrono::Duration as ChronoDuration;

    pub(crate) fn base_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-19T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    /// 使用手动时钟和固定主题的 App
    pub(crate) fn test_app() -> (App, ManualClock) {
        let clock = ManualClock::new(base_time());
        let mut config = Config::default();
        config.theme.name = "Dark".to_string();
        let app = App::with_clock(config, None, Box::new(clock.clone()));
        (app, clock)
    }

    fn type_task(app: &mut App, text: &str, expiry: &str) {
        app.input.task = text.to_string();
        app.input.expiry = expiry.to_string();
    }

    #[test]
    fn test_add_clears_inputs() {
        let (mut app, _clock) = test_app();
        type_task(&mut app, "Buy milk", "");
        app.add_task();

        let now = app.now();
        let visible = app.visible_tasks(now);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].text, "Buy milk");
        assert!(!visible[0].completed);
        assert!(app.input.task.is_empty());
        assert!(app.input.expiry.is_empty());
        assert!(app.ui.alert.is_none());
        assert_eq!(app.ui.toast.as_ref().unwrap().message, "Task added");
    }

    #[test]
    fn test_blank_add_is_silent() {
        let (mut app, _clock) = test_app();
        type_task(&mut app, "   ", "2026-10-20 10:00");
        app.add_task();

        assert!(app.tasks.all().is_empty());
        assert!(app.ui.alert.is_none());
        assert!(app.ui.toast.is_none());
        // 输入保持不变
        assert_eq!(app.input.expiry, "2026-10-20 10:00");
    }

    #[test]
    fn test_past_expiry_alerts_and_keeps_inputs() {
        let (mut app, _clock) = test_app();
        let past = (base_time() - ChronoDuration::hours(1)).to_rfc3339();
        type_task(&mut app, "Too late", &past);
        app.add_task();

        assert!(app.tasks.all().is_empty());
        assert_eq!(
            app.ui.alert.as_deref(),
            Some("Expiry date/time must be in the future.")
        );
        assert_eq!(app.input.task, "Too late");
    }

    #[test]
    fn test_garbage_expiry_alerts() {
        let (mut app, _clock) = test_app();
        type_task(&mut app, "Task", "soonish");
        app.add_task();

        assert!(app.tasks.all().is_empty());
        assert!(app.ui.alert.as_deref().unwrap().contains("soonish"));
    }

    #[test]
    fn test_expiring_task_disappears_after_time_passes() {
        let (mut app, clock) = test_app();
        let expiry = (base_time() + ChronoDuration::minutes(1)).to_rfc3339();
        type_task(&mut app, "Call mom", &expiry);
        app.add_task();

        let now = app.now();
        assert_eq!(app.visible_tasks(now).len(), 1);
        assert!(app.visible_tasks(now)[0].expiry.is_some());

        clock.advance(ChronoDuration::minutes(1) + ChronoDuration::seconds(1));
        let later = app.now();
        assert!(app.visible_tasks(later).is_empty());
        assert_eq!(app.tasks.all().len(), 1);
    }

    #[test]
    fn test_toggle_and_delete_selected() {
        let (mut app, _clock) = test_app();
        type_task(&mut app, "first", "");
        app.add_task();
        type_task(&mut app, "second", "");
        app.add_task();
        let now = app.now();
        assert_eq!(app.selected_index(now), Some(1));

        app.select_next();
        assert_eq!(app.selected_index(now), Some(0));
        app.toggle_selected();
        assert!(app.tasks.all()[0].completed);
        app.toggle_selected();
        assert!(!app.tasks.all()[0].completed);

        app.select_previous();
        assert_eq!(app.selected_index(now), Some(1));
        app.delete_selected();
        assert_eq!(app.tasks.all().len(), 1);
        assert_eq!(app.tasks.all()[0].text, "first");
        assert_eq!(app.selected, Some(app.tasks.all()[0].id));

        app.delete_selected();
        assert!(app.tasks.all().is_empty());
        assert_eq!(app.selected, None);
        // 空列表上的操作是 no-op
        app.delete_selected();
        app.toggle_selected();
        app.select_next();
    }

    fn added_id(app: &App, text: &str) -> TaskId {
        app.tasks
            .all()
            .iter()
            .find(|t| t.text == text)
            .map(|t| t.id)
            .unwrap()
    }

    #[test]
    fn test_selection_follows_task_when_earlier_one_expires() {
        let (mut app, clock) = test_app();
        let expiry = (base_time() + ChronoDuration::minutes(1)).to_rfc3339();
        type_task(&mut app, "Call mom", &expiry);
        app.add_task();
        type_task(&mut app, "Buy milk", "");
        app.add_task();
        type_task(&mut app, "Walk dog", "");
        app.add_task();

        let milk = added_id(&app, "Buy milk");
        app.selected = Some(milk);
        assert_eq!(app.selected_index(app.now()), Some(1));

        clock.advance(ChronoDuration::seconds(61));
        let later = app.now();
        // 高亮仍在同一任务上，只是位置上移
        assert_eq!(app.selected_index(later), Some(0));
        assert_eq!(app.selected_task_id(later), Some(milk));

        app.delete_selected();
        let texts: Vec<&str> = app.tasks.all().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Walk dog"]);
        assert_eq!(app.selected, Some(added_id(&app, "Walk dog")));
    }

    #[test]
    fn test_expired_selection_is_not_acted_on() {
        let (mut app, clock) = test_app();
        let expiry = (base_time() + ChronoDuration::minutes(1)).to_rfc3339();
        type_task(&mut app, "Buy milk", "");
        app.add_task();
        type_task(&mut app, "Call mom", &expiry);
        app.add_task();
        assert_eq!(app.selected, Some(added_id(&app, "Call mom")));

        clock.advance(ChronoDuration::seconds(61));
        assert_eq!(app.selected_task_id(app.now()), None);

        // 选中的任务已过期，不会落到别的任务上
        app.toggle_selected();
        app.delete_selected();
        let later = app.now();
        let visible = app.visible_tasks(later);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].text, "Buy milk");
        assert!(!visible[0].completed);

        // 回到列表时重新选中第一条可见任务
        app.focus(Focus::List);
        assert_eq!(app.selected, Some(added_id(&app, "Buy milk")));
    }

    #[test]
    fn test_theme_confirm_without_path() {
        let (mut app, _clock) = test_app();
        app.open_theme_selector();
        app.ui.theme_selector_index = Theme::Nord.index();
        app.theme_selector_confirm();

        assert_eq!(app.ui.theme, Theme::Nord);
        assert_eq!(app.config.theme.name, "Nord");
        assert!(!app.ui.show_theme_selector);
    }

    #[test]
    fn test_theme_confirm_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut app = App::with_clock(
            Config::default(),
            Some(path.clone()),
            Box::new(ManualClock::new(base_time())),
        );

        app.open_theme_selector();
        app.ui.theme_selector_index = Theme::Paper.index();
        app.theme_selector_confirm();

        let saved = crate::storage::config::load_config_from(&path).unwrap();
        assert_eq!(saved.theme(), Theme::Paper);
    }
}
