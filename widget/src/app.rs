//! Key handling for the task list screen.
//!
//! Keys either edit local text (the new-task input or a rename draft) or
//! produce an `Intent` for the caller to hand to `TaskSync`. Row selection
//! indexes the displayed order, newest first.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tasklist_core::{Intent, Status, TaskListView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

#[derive(Debug)]
pub struct App {
    pub view: TaskListView,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            view: TaskListView::new(),
            focus: Focus::Input,
            selected: 0,
            should_quit: false,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn selected_id(&self) -> Option<String> {
        self.view.displayed_at(self.selected).map(|task| task.id.clone())
    }

    /// Rows are only drawn, and only actionable, once a fetch has succeeded
    /// and no later request has failed.
    pub fn rows_visible(&self) -> bool {
        *self.view.status() == Status::Ready
    }

    /// Keep the selection on an existing row after the list changed size.
    pub fn clamp_selection(&mut self) {
        let len = self.view.tasks().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Intent> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }
        if !self.rows_visible() {
            self.view.cancel_edit();
        }
        if self.view.editing().is_some() {
            return self.handle_edit_key(key);
        }
        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::List if self.rows_visible() => self.handle_list_key(key),
            Focus::List => self.handle_hidden_list_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Option<Intent> {
        match key.code {
            KeyCode::Enter => return Some(Intent::Add),
            KeyCode::Char(c) => self.view.input_mut().push(c),
            KeyCode::Backspace => {
                self.view.input_mut().pop();
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Esc => self.focus = Focus::List,
            _ => {}
        }
        None
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<Intent> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Char(' ') | KeyCode::Char('x') => return self.selected_id().map(Intent::Toggle),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    self.view.begin_edit(&id);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => return self.selected_id().map(Intent::Delete),
            KeyCode::Char('r') => return Some(Intent::Refresh),
            KeyCode::Tab | KeyCode::Char('i') => self.focus = Focus::Input,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
        None
    }

    /// While loading or after a failure no rows are on screen, so only
    /// retrying, leaving the list, and quitting are offered.
    fn handle_hidden_list_key(&mut self, key: KeyEvent) -> Option<Intent> {
        match key.code {
            KeyCode::Char('r') => return Some(Intent::Refresh),
            KeyCode::Tab | KeyCode::Char('i') => self.focus = Focus::Input,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
        None
    }

    /// Moving away from the row counts as losing focus, which commits. A blank
    /// draft cannot be committed, so the row keeps focus instead.
    fn handle_edit_key(&mut self, key: KeyEvent) -> Option<Intent> {
        match key.code {
            KeyCode::Enter => Some(Intent::CommitEdit),
            KeyCode::Esc => {
                self.view.cancel_edit();
                None
            }
            KeyCode::Char(c) => {
                self.view.draft_mut()?.push(c);
                None
            }
            KeyCode::Backspace => {
                self.view.draft_mut()?.pop();
                None
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Tab if !self.draft_committable() => None,
            KeyCode::Up => {
                self.move_selection(-1);
                Some(Intent::CommitEdit)
            }
            KeyCode::Down => {
                self.move_selection(1);
                Some(Intent::CommitEdit)
            }
            KeyCode::Tab => {
                self.focus = Focus::Input;
                Some(Intent::CommitEdit)
            }
            _ => None,
        }
    }

    fn draft_committable(&self) -> bool {
        self.view
            .editing()
            .is_some_and(|edit| !edit.draft.trim().is_empty())
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.view.tasks().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }
}
