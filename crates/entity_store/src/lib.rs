//! In-memory entity store for TaskHub.
//!
//! [`EntityStore`] is the CRUD surface over the eight entity collections and
//! [`MemoryEntityStore`] its only implementation. The store assigns ids and
//! timestamps, cascades project deletion to tasks, and notifies registered
//! [`StoreObserver`]s after every successful mutation.

mod collection;
mod error;
mod id;
mod memory;
mod observer;
mod seed;
mod traits;

pub use error::*;
pub use id::*;
pub use memory::*;
pub use observer::{ChangeKind, StoreEvent, StoreObserver, SubscriptionId};
pub use seed::*;
pub use traits::*;
