//! Entity kind and the shared record contract.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of any entity. Ids are opaque strings such as `project-1`.
pub type EntityId = String;

/// The kinds of entity held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Team member.
    User,
    /// Project.
    Project,
    /// Task belonging to a project.
    Task,
    /// Chat message.
    Message,
    /// Personal or project note.
    Note,
    /// Calendar meeting.
    Meeting,
    /// Uploaded file.
    File,
    /// Uploaded report.
    Report,
}

impl EntityKind {
    /// Returns the prefix used when generating ids for this kind.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Project => "project",
            Self::Task => "task",
            Self::Message => "message",
            Self::Note => "note",
            Self::Meeting => "meeting",
            Self::File => "file",
            Self::Report => "report",
        }
    }

    /// Returns all entity kinds.
    pub fn all() -> &'static [EntityKind] {
        &[
            Self::User,
            Self::Project,
            Self::Task,
            Self::Message,
            Self::Note,
            Self::Meeting,
            Self::File,
            Self::Report,
        ]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id_prefix())
    }
}

/// Common contract of every stored record.
///
/// `Draft` is the record without its generated fields (id, and the creation
/// timestamp for time-stamped kinds). `Patch` is the typed partial update.
pub trait Entity: Clone {
    /// Kind of this record.
    const KIND: EntityKind;

    /// Creation payload.
    type Draft;

    /// Partial update payload.
    type Patch;

    /// Returns the record's id.
    fn id(&self) -> &str;

    /// Builds a record from its draft. Kinds without a creation timestamp
    /// ignore `now`.
    fn from_draft(id: EntityId, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Overwrites the fields present in `patch`.
    fn apply(&mut self, patch: Self::Patch);
}

/// Assigns `value` to `target` when the patch carries it.
pub(crate) fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
