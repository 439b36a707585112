//! Report entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::set;
use crate::{Entity, EntityId, EntityKind};

/// An uploaded report with an explicit reader list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Unique identifier.
    pub id: EntityId,
    /// Title.
    pub title: String,
    /// Summary.
    pub description: String,
    /// Download URL.
    pub file_url: String,
    /// Size in bytes.
    pub file_size: u64,
    /// MIME type.
    pub file_type: String,
    /// Uploader user ID.
    pub uploaded_by: EntityId,
    /// When the report was uploaded.
    pub upload_date: DateTime<Utc>,
    /// User IDs allowed to read the report.
    pub view_permissions: Vec<EntityId>,
    /// Category, e.g. `marketing` or `technical`.
    pub category: String,
}

impl Report {
    /// Returns true if the user uploaded the report or was granted access.
    pub fn is_visible_to(&self, user_id: &str) -> bool {
        self.uploaded_by == user_id || self.view_permissions.iter().any(|id| id == user_id)
    }
}

/// Creation payload for a [`Report`]. The upload date is stamped by the
/// store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub title: String,
    pub description: String,
    pub file_url: String,
    pub file_size: u64,
    pub file_type: String,
    pub uploaded_by: EntityId,
    pub view_permissions: Vec<EntityId>,
    pub category: String,
}

impl NewReport {
    /// Creates a report draft readable only by its uploader.
    pub fn new(
        title: impl Into<String>,
        file_url: impl Into<String>,
        file_size: u64,
        file_type: impl Into<String>,
        uploaded_by: impl Into<EntityId>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            file_url: file_url.into(),
            file_size,
            file_type: file_type.into(),
            uploaded_by: uploaded_by.into(),
            view_permissions: Vec::new(),
            category: "general".to_string(),
        }
    }

    /// Sets the summary.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Grants read access to the given users.
    pub fn with_view_permissions<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EntityId>,
    {
        self.view_permissions = users.into_iter().map(Into::into).collect();
        self
    }
}

/// Partial update for a [`Report`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub file_size: Option<u64>,
    pub file_type: Option<String>,
    pub view_permissions: Option<Vec<EntityId>>,
    pub category: Option<String>,
}

impl Entity for Report {
    const KIND: EntityKind = EntityKind::Report;
    type Draft = NewReport;
    type Patch = ReportPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: EntityId, draft: NewReport, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            file_url: draft.file_url,
            file_size: draft.file_size,
            file_type: draft.file_type,
            uploaded_by: draft.uploaded_by,
            upload_date: now,
            view_permissions: draft.view_permissions,
            category: draft.category,
        }
    }

    fn apply(&mut self, patch: ReportPatch) {
        set(&mut self.title, patch.title);
        set(&mut self.description, patch.description);
        set(&mut self.file_url, patch.file_url);
        set(&mut self.file_size, patch.file_size);
        set(&mut self.file_type, patch.file_type);
        set(&mut self.view_permissions, patch.view_permissions);
        set(&mut self.category, patch.category);
    }
}
