use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{advance_timestamp, nullable, require_non_blank};
use crate::error::MockError;

/// Task workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Backlog,
    Todo,
    #[serde(rename = "in progress")]
    InProgress,
    Done,
    Canceled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::InProgress => "in progress",
            Self::Done => "done",
            Self::Canceled => "canceled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskLabel {
    Bug,
    Feature,
    Documentation,
}

/// A task record as stored under the tasks key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// `TASK-<4 digits>`.
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub label: TaskLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

/// `POST /api/tasks` body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTaskRequest {
    pub title: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub label: TaskLabel,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    pub fn validate(&self) -> Result<(), MockError> {
        require_non_blank("title", &self.title)
    }

    /// Build the stored record for this request.
    pub fn into_task(self, id: String, now: DateTime<Utc>) -> Task {
        Task {
            id,
            title: self.title,
            status: self.status,
            priority: self.priority,
            label: self.label,
            assignee: self.assignee,
            description: self.description,
            created_at: now,
            updated_at: now,
            due_date: self.due_date,
        }
    }
}

/// `PUT /api/tasks/:id` body. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub label: Option<TaskLabel>,
    #[serde(default, deserialize_with = "nullable")]
    pub assignee: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl UpdateTaskRequest {
    pub fn validate(&self) -> Result<(), MockError> {
        match &self.title {
            Some(title) => require_non_blank("title", title),
            None => Ok(()),
        }
    }
}

impl Task {
    /// Shallow-merge `patch` over this record and bump `updatedAt`.
    pub fn apply(&mut self, patch: UpdateTaskRequest) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = assignee;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        self.updated_at = advance_timestamp(self.updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Task {
        let now = Utc::now();
        Task {
            id: "TASK-1001".to_string(),
            title: "Implement login feature".to_string(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            label: TaskLabel::Feature,
            assignee: Some("Test User".to_string()),
            description: None,
            created_at: now,
            updated_at: now,
            due_date: None,
        }
    }

    #[test]
    fn test_status_wire_names() {
        let v = serde_json::to_value(TaskStatus::InProgress).unwrap();
        assert_eq!(v, json!("in progress"));
        let s: TaskStatus = serde_json::from_value(json!("canceled")).unwrap();
        assert_eq!(s, TaskStatus::Canceled);
        assert_eq!(TaskStatus::InProgress.as_str(), "in progress");
    }

    #[test]
    fn test_task_camel_case_shape() {
        let v = serde_json::to_value(sample()).unwrap();
        assert!(v.get("createdAt").is_some());
        assert!(v.get("updatedAt").is_some());
        assert!(v.get("description").is_none(), "absent optionals are omitted");
        assert_eq!(v["status"], "in progress");
    }

    #[test]
    fn test_seeded_shape_parses() {
        let raw = json!({
            "id": "TASK-1002",
            "title": "Fix navigation bug",
            "status": "todo",
            "priority": "medium",
            "label": "bug",
            "assignee": "Test User",
            "description": "Description for Fix navigation bug",
            "createdAt": "2024-05-01T10:00:00.000Z",
            "updatedAt": "2024-05-01T10:00:00.000Z",
            "dueDate": "2024-05-08T10:00:00.000Z"
        });
        let task: Task = serde_json::from_value(raw).unwrap();
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.due_date.is_some());
    }

    #[test]
    fn test_create_rejects_unknown_fields() {
        let raw = json!({
            "title": "x", "status": "todo", "priority": "low", "label": "bug",
            "color": "red"
        });
        assert!(serde_json::from_value::<CreateTaskRequest>(raw).is_err());
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let raw = json!({"title": "  ", "status": "todo", "priority": "low", "label": "bug"});
        let req: CreateTaskRequest = serde_json::from_value(raw).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_patch_distinguishes_null_from_absent() {
        let patch: UpdateTaskRequest =
            serde_json::from_value(json!({"assignee": null, "title": "New"})).unwrap();
        assert_eq!(patch.assignee, Some(None));
        assert_eq!(patch.description, None);

        let mut task = sample();
        let before = task.updated_at;
        task.apply(patch);
        assert_eq!(task.title, "New");
        assert_eq!(task.assignee, None);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(task.updated_at > before);
    }
}
