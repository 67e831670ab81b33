//! Synchronization between the view model and the remote collection.
//!
//! # Design
//! Every mutation is a single HTTP call followed by a full re-fetch of the
//! collection; the view never patches its cache from a mutation response.
//! Failures are recorded on the view and logged, then dropped: nothing is
//! retried and a failed mutation does not trigger a re-fetch.

use tracing::{debug, info, warn};

use crate::client::TaskClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::NewTask;
use crate::view::TaskListView;

/// A user-level action handed from the front end to `TaskSync::apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Refresh,
    /// Create a task from the view's input text.
    Add,
    Toggle(String),
    /// Confirm the view's rename in progress.
    CommitEdit,
    Delete(String),
}

pub struct TaskSync<T> {
    client: TaskClient,
    transport: T,
}

impl<T: Transport> TaskSync<T> {
    pub fn new(client: TaskClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &TaskClient {
        &self.client
    }

    pub fn apply(&self, intent: Intent, view: &mut TaskListView) {
        match intent {
            Intent::Refresh => self.refresh(view),
            Intent::Add => self.add(view),
            Intent::Toggle(id) => self.toggle(view, &id),
            Intent::CommitEdit => self.commit_edit(view),
            Intent::Delete(id) => self.delete(view, &id),
        }
    }

    /// Replace the view's cache with the server's current collection.
    pub fn refresh(&self, view: &mut TaskListView) {
        let result = self
            .transport
            .execute(self.client.build_list_tasks())
            .and_then(|response| self.client.parse_list_tasks(response));
        match result {
            Ok(tasks) => {
                debug!(count = tasks.len(), "fetched task collection");
                view.replace_tasks(tasks);
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch task collection");
                view.fail(err.to_string());
            }
        }
    }

    /// Create a task from the input text. Blank input sends nothing.
    pub fn add(&self, view: &mut TaskListView) {
        let Some(title) = view.take_new_title() else {
            debug!("ignoring blank new task");
            return;
        };
        let result = self
            .client
            .build_create_task(&NewTask::new(title))
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_create_task(response));
        self.finish("add", result.map(|task| task.id), view);
    }

    pub fn toggle(&self, view: &mut TaskListView, id: &str) {
        let Some(task) = view.find(id) else {
            debug!(id, "toggle on a task missing from the cache");
            return;
        };
        let toggled = task.toggled();
        let result = self
            .client
            .build_update_task(&toggled)
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_update_task(response));
        self.finish("toggle", result.map(|task| task.id), view);
    }

    /// Resend the task for `id` with `title`. Blank titles send nothing.
    pub fn rename(&self, view: &mut TaskListView, id: &str, title: &str) {
        if title.trim().is_empty() {
            debug!(id, "ignoring blank rename");
            return;
        }
        let Some(task) = view.find(id) else {
            debug!(id, "rename on a task missing from the cache");
            return;
        };
        let renamed = task.renamed(title);
        let result = self
            .client
            .build_update_task(&renamed)
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_update_task(response));
        self.finish("rename", result.map(|task| task.id), view);
    }

    /// Send the view's rename in progress, if it has a non-blank draft.
    pub fn commit_edit(&self, view: &mut TaskListView) {
        if let Some((id, title)) = view.commit_edit() {
            self.rename(view, &id, &title);
        }
    }

    pub fn delete(&self, view: &mut TaskListView, id: &str) {
        let result = self
            .transport
            .execute(self.client.build_delete_task(id))
            .and_then(|response| self.client.parse_delete_task(response));
        self.finish("delete", result.map(|()| id.to_string()), view);
    }

    fn finish(&self, action: &str, result: Result<String, ApiError>, view: &mut TaskListView) {
        match result {
            Ok(id) => {
                info!(action, id = %id, "task mutation succeeded");
                self.refresh(view);
            }
            Err(err) => {
                warn!(action, error = %err, "task mutation failed");
                view.fail(err.to_string());
            }
        }
    }
}
