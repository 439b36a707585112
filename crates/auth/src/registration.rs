//! Account registration requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact that receives registration requests for approval.
pub const ADMIN_CONTACT: &str = "aw@icmw.de";

/// A pending account request awaiting admin approval.
///
/// Registering never creates a user or a session; an administrator adds the
/// user to the store once the request is approved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub role: String,
    /// Address the request was sent to.
    pub admin_contact: String,
    pub requested_at: DateTime<Utc>,
}

impl RegistrationRequest {
    pub(crate) fn new(name: &str, email: &str, role: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            admin_contact: ADMIN_CONTACT.to_string(),
            requested_at: Utc::now(),
        }
    }
}
