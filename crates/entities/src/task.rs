//! Task-related entity definitions.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::set;
use crate::{Entity, EntityId, EntityKind, Priority};

/// Status of a Task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    /// Not started.
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    /// Being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Waiting for review.
    Review,
    /// Done.
    Completed,
}

impl TaskStatus {
    /// Returns true if the task is finished.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Display label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of work inside a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier.
    pub id: EntityId,
    /// Task title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Owning project ID.
    pub project_id: EntityId,
    /// Current status.
    pub status: TaskStatus,
    /// Priority.
    pub priority: Priority,
    /// Assigned user IDs.
    pub assignees: Vec<EntityId>,
    /// Due date.
    pub due_date: NaiveDate,
    /// ID of the user who created the task.
    pub created_by: EntityId,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When the task was completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Returns true if the user is assigned to this task.
    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.assignees.iter().any(|id| id == user_id)
    }
}

/// Creation payload for a [`Task`]. `created_at` is stamped by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub project_id: EntityId,
    pub status: TaskStatus,
    pub priority: Priority,
    pub assignees: Vec<EntityId>,
    pub due_date: NaiveDate,
    pub created_by: EntityId,
}

impl NewTask {
    /// Creates a `To Do` task draft with medium priority.
    pub fn new(
        title: impl Into<String>,
        project_id: impl Into<EntityId>,
        created_by: impl Into<EntityId>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            project_id: project_id.into(),
            status: TaskStatus::ToDo,
            priority: Priority::Medium,
            assignees: Vec::new(),
            due_date,
            created_by: created_by.into(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the assignees.
    pub fn with_assignees<I, S>(mut self, assignees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EntityId>,
    {
        self.assignees = assignees.into_iter().map(Into::into).collect();
        self
    }
}

/// Partial update for a [`Task`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project_id: Option<EntityId>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub assignees: Option<Vec<EntityId>>,
    pub due_date: Option<NaiveDate>,
    pub created_by: Option<EntityId>,
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

impl Entity for Task {
    const KIND: EntityKind = EntityKind::Task;
    type Draft = NewTask;
    type Patch = TaskPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: EntityId, draft: NewTask, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            project_id: draft.project_id,
            status: draft.status,
            priority: draft.priority,
            assignees: draft.assignees,
            due_date: draft.due_date,
            created_by: draft.created_by,
            created_at: now,
            completed_at: None,
        }
    }

    fn apply(&mut self, patch: TaskPatch) {
        set(&mut self.title, patch.title);
        set(&mut self.description, patch.description);
        set(&mut self.project_id, patch.project_id);
        set(&mut self.status, patch.status);
        set(&mut self.priority, patch.priority);
        set(&mut self.assignees, patch.assignees);
        set(&mut self.due_date, patch.due_date);
        set(&mut self.created_by, patch.created_by);
        set(&mut self.completed_at, patch.completed_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewTask {
        NewTask::new(
            "Finalize homepage design",
            "project-1",
            "user-1",
            NaiveDate::from_ymd_opt(2024, 8, 12).unwrap(),
        )
    }

    #[test]
    fn test_task_creation_stamps_created_at() {
        let now = Utc::now();
        let task = Task::from_draft(
            "task-1".to_string(),
            draft().with_assignees(["user-2"]).with_priority(Priority::High),
            now,
        );

        assert_eq!(task.created_at, now);
        assert_eq!(task.status, TaskStatus::ToDo);
        assert!(task.completed_at.is_none());
        assert!(task.is_assigned_to("user-2"));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&TaskStatus::ToDo).unwrap(), "\"To Do\"");
        let status: TaskStatus = serde_json::from_str("\"Review\"").unwrap();
        assert_eq!(status, TaskStatus::Review);
        assert!(TaskStatus::Completed.is_completed());
        assert!(!TaskStatus::Review.is_completed());
        assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
    }

    #[test]
    fn test_patch_moves_task_between_projects() {
        let mut task = Task::from_draft("task-1".to_string(), draft(), Utc::now());
        task.apply(TaskPatch {
            project_id: Some("project-2".to_string()),
            ..Default::default()
        });

        assert_eq!(task.project_id, "project-2");
        assert_eq!(task.title, "Finalize homepage design");
    }
}
