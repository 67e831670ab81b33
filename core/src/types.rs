//! Domain DTOs for the task collection endpoint.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! The backend is a third-party collection API, so unknown fields in its
//! responses are ignored rather than rejected. Integration tests catch any
//! schema drift against the mock server.

use serde::{Deserialize, Serialize};

/// A single task as listed by the collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub complete: bool,
}

impl Task {
    /// Copy of this task with `complete` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            complete: !self.complete,
            ..self.clone()
        }
    }

    /// Copy of this task with a replaced title.
    pub fn renamed(&self, title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..self.clone()
        }
    }
}

/// Request payload for creating a task. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub complete: bool,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            complete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            id: "7".to_string(),
            title: "Water plants".to_string(),
            complete: false,
        }
    }

    #[test]
    fn toggled_flips_only_complete() {
        let toggled = task().toggled();
        assert_eq!(toggled.id, "7");
        assert_eq!(toggled.title, "Water plants");
        assert!(toggled.complete);
        assert!(!toggled.toggled().complete);
    }

    #[test]
    fn renamed_replaces_only_title() {
        let renamed = task().renamed("Buy milk");
        assert_eq!(renamed.id, "7");
        assert_eq!(renamed.title, "Buy milk");
        assert!(!renamed.complete);
    }

    #[test]
    fn task_ignores_unknown_fields() {
        let parsed: Task = serde_json::from_str(
            r#"{"id":"1","title":"x","complete":true,"createdAt":"2024-09-01T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(parsed.id, "1");
        assert!(parsed.complete);
    }

    #[test]
    fn task_defaults_complete_to_false() {
        let parsed: Task = serde_json::from_str(r#"{"id":"1","title":"x"}"#).unwrap();
        assert!(!parsed.complete);
    }

    #[test]
    fn new_task_serializes_without_id() {
        let json = serde_json::to_value(NewTask::new("Buy milk")).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Buy milk", "complete": false}));
    }
}
