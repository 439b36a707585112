//! Meeting entity definitions.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::set;
use crate::{Entity, EntityId, EntityKind};

/// A scheduled meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Unique identifier.
    pub id: EntityId,
    /// Title.
    pub title: String,
    /// Agenda.
    pub description: String,
    /// Start time.
    pub start_time: DateTime<Utc>,
    /// End time.
    pub end_time: DateTime<Utc>,
    /// Room, call link or phone.
    pub location: String,
    /// Organizer user ID.
    pub organizer: EntityId,
    /// Attendee user IDs.
    pub attendees: Vec<EntityId>,
    /// Whether the meeting repeats.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_recurring: bool,
    /// Free-form recurrence rule, e.g. `weekly`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_pattern: Option<String>,
}

impl Meeting {
    /// Returns the scheduled length of the meeting.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

/// Creation payload for a [`Meeting`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewMeeting {
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub organizer: EntityId,
    pub attendees: Vec<EntityId>,
    pub is_recurring: bool,
    pub recurrence_pattern: Option<String>,
}

impl NewMeeting {
    /// Creates a one-off meeting draft. The organizer is the only attendee.
    pub fn new(
        title: impl Into<String>,
        organizer: impl Into<EntityId>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        let organizer = organizer.into();
        Self {
            title: title.into(),
            description: String::new(),
            start_time,
            end_time,
            location: String::new(),
            attendees: vec![organizer.clone()],
            organizer,
            is_recurring: false,
            recurrence_pattern: None,
        }
    }

    /// Sets the agenda.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the attendees.
    pub fn with_attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EntityId>,
    {
        self.attendees = attendees.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the meeting as recurring.
    pub fn recurring(mut self, pattern: impl Into<String>) -> Self {
        self.is_recurring = true;
        self.recurrence_pattern = Some(pattern.into());
        self
    }
}

/// Partial update for a [`Meeting`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub organizer: Option<EntityId>,
    pub attendees: Option<Vec<EntityId>>,
    pub is_recurring: Option<bool>,
    pub recurrence_pattern: Option<Option<String>>,
}

impl Entity for Meeting {
    const KIND: EntityKind = EntityKind::Meeting;
    type Draft = NewMeeting;
    type Patch = MeetingPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: EntityId, draft: NewMeeting, _now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            start_time: draft.start_time,
            end_time: draft.end_time,
            location: draft.location,
            organizer: draft.organizer,
            attendees: draft.attendees,
            is_recurring: draft.is_recurring,
            recurrence_pattern: draft.recurrence_pattern,
        }
    }

    fn apply(&mut self, patch: MeetingPatch) {
        set(&mut self.title, patch.title);
        set(&mut self.description, patch.description);
        set(&mut self.start_time, patch.start_time);
        set(&mut self.end_time, patch.end_time);
        set(&mut self.location, patch.location);
        set(&mut self.organizer, patch.organizer);
        set(&mut self.attendees, patch.attendees);
        set(&mut self.is_recurring, patch.is_recurring);
        set(&mut self.recurrence_pattern, patch.recurrence_pattern);
    }
}
