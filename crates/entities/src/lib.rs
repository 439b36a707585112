//! Core entity definitions for TaskHub.
//!
//! This crate defines the records shared by the store, the authentication
//! layer and the command-line front end: users, projects, tasks, messages,
//! notes, meetings, files and reports, together with their creation drafts
//! and typed partial updates.

mod file;
mod kind;
mod meeting;
mod message;
mod note;
mod project;
mod report;
mod task;
mod user;

pub use file::*;
pub use kind::{Entity, EntityId, EntityKind};
pub use meeting::*;
pub use message::*;
pub use note::*;
pub use project::*;
pub use report::*;
pub use task::*;
pub use user::*;
