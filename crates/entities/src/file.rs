//! Uploaded file entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::set;
use crate::{Entity, EntityId, EntityKind};

/// A file uploaded by a team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileItem {
    /// Unique identifier.
    pub id: EntityId,
    /// File name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Download URL.
    pub url: String,
    /// Uploader user ID.
    pub uploaded_by: EntityId,
    /// When the file was uploaded.
    pub upload_date: DateTime<Utc>,
    /// Associated project ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<EntityId>,
}

/// Creation payload for a [`FileItem`]. The upload date is stamped by the
/// store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFileItem {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub url: String,
    pub uploaded_by: EntityId,
    pub project_id: Option<EntityId>,
}

impl NewFileItem {
    pub fn new(
        name: impl Into<String>,
        size: u64,
        mime_type: impl Into<String>,
        url: impl Into<String>,
        uploaded_by: impl Into<EntityId>,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            url: url.into(),
            uploaded_by: uploaded_by.into(),
            project_id: None,
        }
    }

    /// Attaches the file to a project.
    pub fn for_project(mut self, project_id: impl Into<EntityId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

/// Partial update for a [`FileItem`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileItemPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub project_id: Option<Option<EntityId>>,
}

impl Entity for FileItem {
    const KIND: EntityKind = EntityKind::File;
    type Draft = NewFileItem;
    type Patch = FileItemPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: EntityId, draft: NewFileItem, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            size: draft.size,
            mime_type: draft.mime_type,
            url: draft.url,
            uploaded_by: draft.uploaded_by,
            upload_date: now,
            project_id: draft.project_id,
        }
    }

    fn apply(&mut self, patch: FileItemPatch) {
        set(&mut self.name, patch.name);
        set(&mut self.url, patch.url);
        set(&mut self.project_id, patch.project_id);
    }
}
