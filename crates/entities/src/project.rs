//! Project-related entity definitions.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::set;
use crate::{Entity, EntityId, EntityKind};

/// Status of a Project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectStatus {
    /// Not started yet.
    #[default]
    Planning,
    /// Work under way.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Paused.
    #[serde(rename = "On Hold")]
    OnHold,
    /// Finished.
    Completed,
}

/// Priority shared by projects and tasks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl ProjectStatus {
    /// Display label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::InProgress => "In Progress",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        f.write_str(label)
    }
}

/// A project that groups tasks and a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier.
    pub id: EntityId,
    /// Project name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
    /// Current status.
    pub status: ProjectStatus,
    /// Priority.
    pub priority: Priority,
    /// Start date.
    pub start_date: NaiveDate,
    /// Due date.
    pub due_date: NaiveDate,
    /// Team member user IDs.
    pub team: Vec<EntityId>,
    /// Accent color, e.g. `#3b82f6`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Project {
    /// Returns true if the user is on the project team.
    pub fn has_member(&self, user_id: &str) -> bool {
        self.team.iter().any(|id| id == user_id)
    }
}

/// Creation payload for a [`Project`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub progress: u8,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub team: Vec<EntityId>,
    pub color: Option<String>,
}

impl NewProject {
    /// Creates a project draft in `Planning` with no progress and no team.
    pub fn new(name: impl Into<String>, start_date: NaiveDate, due_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            progress: 0,
            status: ProjectStatus::Planning,
            priority: Priority::Medium,
            start_date,
            due_date,
            team: Vec::new(),
            color: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the progress, clamped to 100.
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress.min(100);
        self
    }

    /// Sets the team.
    pub fn with_team<I, S>(mut self, team: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EntityId>,
    {
        self.team = team.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the accent color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Partial update for a [`Project`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub progress: Option<u8>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub team: Option<Vec<EntityId>>,
    pub color: Option<Option<String>>,
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;
    type Draft = NewProject;
    type Patch = ProjectPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: EntityId, draft: NewProject, _now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            progress: draft.progress.min(100),
            status: draft.status,
            priority: draft.priority,
            start_date: draft.start_date,
            due_date: draft.due_date,
            team: draft.team,
            color: draft.color,
        }
    }

    fn apply(&mut self, patch: ProjectPatch) {
        set(&mut self.name, patch.name);
        set(&mut self.description, patch.description);
        set(&mut self.progress, patch.progress.map(|p| p.min(100)));
        set(&mut self.status, patch.status);
        set(&mut self.priority, patch.priority);
        set(&mut self.start_date, patch.start_date);
        set(&mut self.due_date, patch.due_date);
        set(&mut self.team, patch.team);
        set(&mut self.color, patch.color);
    }
}
