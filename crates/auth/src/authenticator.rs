//! Demo login flow and the current session.

use entities::{Entity, User, UserPatch};
use entity_store::EntityStore;
use tracing::{debug, info, warn};

use crate::{AuthError, AuthResult, RegistrationRequest, SessionStorage, SESSION_KEY};

/// The only password the demo accepts, for every user.
pub const DEMO_PASSWORD: &str = "icmw2018";

/// Tracks the logged-in user and persists it through a [`SessionStorage`].
#[derive(Debug)]
pub struct Authenticator<S> {
    storage: S,
    current: Option<User>,
}

impl<S: SessionStorage> Authenticator<S> {
    /// Creates an authenticator and restores any persisted session.
    pub fn new(storage: S) -> AuthResult<Self> {
        let mut auth = Self {
            storage,
            current: None,
        };
        auth.restore()?;
        Ok(auth)
    }

    /// Reloads the session from storage.
    ///
    /// A blob that does not parse as a user is deleted and the session is
    /// left empty.
    pub fn restore(&mut self) -> AuthResult<Option<&User>> {
        self.current = None;
        let Some(blob) = self.storage.get(SESSION_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&blob) {
            Ok(user) => {
                debug!(user_id = %user.id, "Restored session");
                self.current = Some(user);
            }
            Err(e) => {
                warn!(error = %e, "Discarding unreadable stored session");
                self.storage.delete(SESSION_KEY)?;
            }
        }
        Ok(self.current.as_ref())
    }

    /// Logs in a user of `store`.
    ///
    /// The email is matched case-insensitively and the password must be
    /// [`DEMO_PASSWORD`]. On failure any existing session is kept.
    pub fn login(
        &mut self,
        store: &impl EntityStore,
        email: &str,
        password: &str,
    ) -> AuthResult<&User> {
        let user = match store.user_by_email(email) {
            Some(user) if password == DEMO_PASSWORD => user.clone(),
            _ => {
                warn!(email, "Login failed");
                return Err(AuthError::InvalidCredentials);
            }
        };

        self.persist(&user)?;
        info!(user_id = %user.id, "User logged in");
        Ok(self.current.insert(user))
    }

    /// Clears the session.
    pub fn logout(&mut self) -> AuthResult<()> {
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "User logged out");
        }
        self.storage.delete(SESSION_KEY)
    }

    /// Returns the logged-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Submits an account request for admin approval.
    ///
    /// The password is not retained.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        _password: &str,
        role: &str,
    ) -> RegistrationRequest {
        let request = RegistrationRequest::new(name, email, role);
        info!(
            admin = %request.admin_contact,
            name,
            email,
            role,
            "Registration request sent to admin"
        );
        request
    }

    /// Merges `patch` into the session user and persists the result.
    ///
    /// Only the session copy changes; the store's user record is left alone.
    /// Returns `None` when nobody is logged in.
    pub fn update_profile(&mut self, patch: UserPatch) -> AuthResult<Option<&User>> {
        let Some(current) = self.current.as_ref() else {
            debug!("Profile update ignored, no session");
            return Ok(None);
        };

        let mut updated = current.clone();
        updated.apply(patch);
        self.persist(&updated)?;
        debug!(user_id = %updated.id, "Profile updated");
        Ok(Some(self.current.insert(updated)))
    }

    /// Returns the session storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self, user: &User) -> AuthResult<()> {
        let blob = serde_json::to_string(user)?;
        self.storage.set(SESSION_KEY, &blob)
    }
}
