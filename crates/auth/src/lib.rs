//! Demo authentication for TaskHub.
//!
//! This crate provides:
//! - Login against the store's users with the shared demo password
//! - Session persistence through pluggable [`SessionStorage`] backends
//! - Registration requests routed to the admin contact
//! - Profile updates applied to the session user

mod authenticator;
mod error;
mod registration;
mod session;

pub use authenticator::*;
pub use error::*;
pub use registration::*;
pub use session::*;
