//! View model for the task list screen.
//!
//! # Design
//! `TaskListView` owns everything the screen shows: a cached copy of the last
//! successful fetch, the new-task input, the single in-progress rename, and a
//! status. It performs no I/O; `TaskSync` feeds it fetch results and failures.
//! The cache is only ever replaced wholesale, never patched.

use crate::types::Task;

/// What the screen shows instead of, or in addition to, the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// No fetch has completed yet.
    Loading,
    /// The cache holds the last successful fetch.
    Ready,
    /// The last fetch or mutation failed.
    Failed(String),
}

/// A row currently switched into text-input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub id: String,
    pub draft: String,
}

#[derive(Debug, Clone)]
pub struct TaskListView {
    tasks: Vec<Task>,
    status: Status,
    input: String,
    editing: Option<EditState>,
    busy: bool,
}

impl Default for TaskListView {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListView {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            status: Status::Loading,
            input: String::new(),
            editing: None,
            busy: false,
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Tasks in server listing order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks in display order: most recently listed first.
    pub fn displayed(&self) -> impl DoubleEndedIterator<Item = &Task> + ExactSizeIterator {
        self.tasks.iter().rev()
    }

    /// The task at `row` in display order.
    pub fn displayed_at(&self, row: usize) -> Option<&Task> {
        self.displayed().nth(row)
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Install a fresh fetch. Drops the rename in progress if its task is gone.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.status = Status::Ready;
        let vanished = self
            .editing
            .as_ref()
            .is_some_and(|edit| self.find(&edit.id).is_none());
        if vanished {
            self.editing = None;
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = Status::Failed(message.into());
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    // -- new-task input -----------------------------------------------------

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Take the input for a create request. Blank input stays untouched and
    /// yields `None`.
    pub fn take_new_title(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.input))
    }

    // -- rename -------------------------------------------------------------

    pub fn editing(&self) -> Option<&EditState> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().is_some_and(|edit| edit.id == id)
    }

    /// Switch the row for `id` into edit mode, seeded with its title. Any
    /// other row's draft is discarded.
    pub fn begin_edit(&mut self, id: &str) {
        let Some(task) = self.find(id) else {
            return;
        };
        self.editing = Some(EditState {
            id: task.id.clone(),
            draft: task.title.clone(),
        });
    }

    pub fn draft_mut(&mut self) -> Option<&mut String> {
        self.editing.as_mut().map(|edit| &mut edit.draft)
    }

    /// Confirm the rename in progress (explicit save or loss of focus).
    ///
    /// Returns the id and new title to send. A blank draft is ignored and
    /// the row stays in edit mode.
    pub fn commit_edit(&mut self) -> Option<(String, String)> {
        let edit = self.editing.as_ref()?;
        if edit.draft.trim().is_empty() {
            return None;
        }
        self.editing.take().map(|edit| (edit.id, edit.draft))
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            complete: false,
        }
    }

    fn ready_view() -> TaskListView {
        let mut view = TaskListView::new();
        view.replace_tasks(vec![task("1", "First"), task("2", "Second"), task("3", "Third")]);
        view
    }

    #[test]
    fn starts_loading_and_empty() {
        let view = TaskListView::new();
        assert_eq!(view.status(), &Status::Loading);
        assert!(view.tasks().is_empty());
        assert!(view.editing().is_none());
    }

    #[test]
    fn displayed_reverses_fetch_order() {
        let view = ready_view();
        let ids: Vec<&str> = view.displayed().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["3", "2", "1"]);
        assert_eq!(view.displayed_at(0).unwrap().id, "3");
        assert!(view.displayed_at(3).is_none());
    }

    #[test]
    fn replace_tasks_is_a_full_replacement() {
        let mut view = ready_view();
        view.replace_tasks(vec![task("9", "Only")]);
        assert_eq!(view.tasks(), &[task("9", "Only")]);
        assert_eq!(view.status(), &Status::Ready);
    }

    #[test]
    fn fail_keeps_cache_but_reports_failure() {
        let mut view = ready_view();
        view.fail("network error: refused");
        assert_eq!(view.status(), &Status::Failed("network error: refused".to_string()));
        assert_eq!(view.tasks().len(), 3);
    }

    #[test]
    fn take_new_title_rejects_blank_input() {
        let mut view = ready_view();
        view.input_mut().push_str("   \t");
        assert!(view.take_new_title().is_none());
        assert_eq!(view.input(), "   \t");
    }

    #[test]
    fn take_new_title_clears_input() {
        let mut view = ready_view();
        view.input_mut().push_str("Buy milk");
        assert_eq!(view.take_new_title().as_deref(), Some("Buy milk"));
        assert_eq!(view.input(), "");
    }

    #[test]
    fn begin_edit_seeds_draft_with_title() {
        let mut view = ready_view();
        view.begin_edit("2");
        assert_eq!(
            view.editing(),
            Some(&EditState {
                id: "2".to_string(),
                draft: "Second".to_string()
            })
        );
        assert!(view.is_editing("2"));
        assert!(!view.is_editing("1"));
    }

    #[test]
    fn begin_edit_on_unknown_id_is_noop() {
        let mut view = ready_view();
        view.begin_edit("missing");
        assert!(view.editing().is_none());
    }

    #[test]
    fn editing_another_row_abandons_previous_draft() {
        let mut view = ready_view();
        view.begin_edit("1");
        view.draft_mut().unwrap().push_str(" (unsaved)");
        view.begin_edit("3");
        assert_eq!(view.editing().unwrap().id, "3");
        assert_eq!(view.editing().unwrap().draft, "Third");
        assert_eq!(view.find("1").unwrap().title, "First");
    }

    #[test]
    fn commit_edit_returns_rename_and_leaves_edit_mode() {
        let mut view = ready_view();
        view.begin_edit("2");
        let draft = view.draft_mut().unwrap();
        draft.clear();
        draft.push_str("Buy milk");
        assert_eq!(
            view.commit_edit(),
            Some(("2".to_string(), "Buy milk".to_string()))
        );
        assert!(view.editing().is_none());
    }

    #[test]
    fn commit_edit_ignores_blank_draft() {
        let mut view = ready_view();
        view.begin_edit("2");
        let draft = view.draft_mut().unwrap();
        draft.clear();
        draft.push_str("  ");
        assert!(view.commit_edit().is_none());
        assert!(view.is_editing("2"));
    }

    #[test]
    fn commit_without_edit_is_none() {
        let mut view = ready_view();
        assert!(view.commit_edit().is_none());
    }

    #[test]
    fn cancel_edit_discards_draft() {
        let mut view = ready_view();
        view.begin_edit("1");
        view.cancel_edit();
        assert!(view.editing().is_none());
    }

    #[test]
    fn refresh_drops_edit_of_vanished_task() {
        let mut view = ready_view();
        view.begin_edit("2");
        view.replace_tasks(vec![task("1", "First"), task("3", "Third")]);
        assert!(view.editing().is_none());

        view.begin_edit("3");
        view.replace_tasks(vec![task("3", "Third")]);
        assert!(view.is_editing("3"));
    }
}
