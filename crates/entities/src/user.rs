//! User-related entity definitions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::set;
use crate::{Entity, EntityId, EntityKind};

/// Avatar used when a new user does not supply one.
pub const DEFAULT_AVATAR: &str = "/placeholder-user.jpg";

/// A team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Email address, also the login name.
    pub email: String,
    /// Job title.
    pub role: String,
    /// Avatar image path.
    pub avatar: String,
    /// Department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Date the user joined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<NaiveDate>,
    /// Whether the user administers the team.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_admin: bool,
}

impl User {
    /// Returns true if `email` matches this user's address, ignoring case.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}

/// Creation payload for a [`User`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: String,
    pub department: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub is_admin: bool,
}

impl NewUser {
    /// Creates a user draft with the default avatar.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            avatar: DEFAULT_AVATAR.to_string(),
            department: None,
            join_date: None,
            is_admin: false,
        }
    }

    /// Sets the avatar path.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Sets the join date.
    pub fn with_join_date(mut self, join_date: NaiveDate) -> Self {
        self.join_date = Some(join_date);
        self
    }

    /// Marks the user as an administrator.
    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}

/// Partial update for a [`User`]. `None` leaves the field untouched; for
/// optional fields `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
    pub department: Option<Option<String>>,
    pub join_date: Option<Option<NaiveDate>>,
    pub is_admin: Option<bool>,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;
    type Draft = NewUser;
    type Patch = UserPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: EntityId, draft: NewUser, _now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            role: draft.role,
            avatar: draft.avatar,
            department: draft.department,
            join_date: draft.join_date,
            is_admin: draft.is_admin,
        }
    }

    fn apply(&mut self, patch: UserPatch) {
        set(&mut self.name, patch.name);
        set(&mut self.email, patch.email);
        set(&mut self.role, patch.role);
        set(&mut self.avatar, patch.avatar);
        set(&mut self.department, patch.department);
        set(&mut self.join_date, patch.join_date);
        set(&mut self.is_admin, patch.is_admin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::from_draft(
            "user-9".to_string(),
            NewUser::new("Test User", "Test@Example.com", "Developer").with_department("R&D"),
            Utc::now(),
        )
    }

    #[test]
    fn test_user_creation() {
        let user = sample();

        assert_eq!(user.id, "user-9");
        assert_eq!(user.avatar, DEFAULT_AVATAR);
        assert_eq!(user.department.as_deref(), Some("R&D"));
        assert!(!user.is_admin);
    }

    #[test]
    fn test_has_email_ignores_case() {
        let user = sample();
        assert!(user.has_email("test@example.com"));
        assert!(user.has_email(" TEST@EXAMPLE.COM "));
        assert!(!user.has_email("other@example.com"));
    }

    #[test]
    fn test_patch_can_clear_optional_field() {
        let mut user = sample();
        user.apply(UserPatch {
            role: Some("Lead".to_string()),
            department: Some(None),
            ..Default::default()
        });

        assert_eq!(user.role, "Lead");
        assert_eq!(user.department, None);
        assert_eq!(user.name, "Test User");
    }

    #[test]
    fn test_serializes_camel_case_and_skips_defaults() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["email"], "Test@Example.com");
        assert!(json.get("isAdmin").is_none());
        assert!(json.get("joinDate").is_none());
    }
}
