//! Note entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::set;
use crate::{Entity, EntityId, EntityKind};

/// A personal note, optionally attached to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier.
    pub id: EntityId,
    /// Author user ID.
    pub user_id: EntityId,
    /// Title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// When the note was written.
    pub timestamp: DateTime<Utc>,
    /// Card color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Associated project ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<EntityId>,
    /// Whether other team members can read the note.
    #[serde(default)]
    pub is_public: bool,
}

/// Creation payload for a [`Note`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub user_id: EntityId,
    pub title: String,
    pub content: String,
    pub color: Option<String>,
    pub project_id: Option<EntityId>,
    pub is_public: bool,
}

impl NewNote {
    /// Creates a private note draft.
    pub fn new(
        user_id: impl Into<EntityId>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            content: content.into(),
            color: None,
            project_id: None,
            is_public: false,
        }
    }

    /// Sets the card color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Attaches the note to a project.
    pub fn for_project(mut self, project_id: impl Into<EntityId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Makes the note visible to the team.
    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }
}

/// Partial update for a [`Note`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub color: Option<Option<String>>,
    pub project_id: Option<Option<EntityId>>,
    pub is_public: Option<bool>,
}

impl Entity for Note {
    const KIND: EntityKind = EntityKind::Note;
    type Draft = NewNote;
    type Patch = NotePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: EntityId, draft: NewNote, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            title: draft.title,
            content: draft.content,
            timestamp: now,
            color: draft.color,
            project_id: draft.project_id,
            is_public: draft.is_public,
        }
    }

    fn apply(&mut self, patch: NotePatch) {
        set(&mut self.title, patch.title);
        set(&mut self.content, patch.content);
        set(&mut self.color, patch.color);
        set(&mut self.project_id, patch.project_id);
        set(&mut self.is_public, patch.is_public);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_creation() {
        let now = Utc::now();
        let note = Note::from_draft(
            "note-1".to_string(),
            NewNote::new("user-1", "Ideas", "- Mobile app")
                .for_project("project-1")
                .public(),
            now,
        );

        assert_eq!(note.timestamp, now);
        assert_eq!(note.project_id.as_deref(), Some("project-1"));
        assert!(note.is_public);
    }

    #[test]
    fn test_patch_detaches_project() {
        let mut note = Note::from_draft(
            "note-1".to_string(),
            NewNote::new("user-1", "Ideas", "").for_project("project-1"),
            Utc::now(),
        );
        note.apply(NotePatch {
            project_id: Some(None),
            ..Default::default()
        });
        assert!(note.project_id.is_none());
        assert_eq!(note.title, "Ideas");
    }
}
