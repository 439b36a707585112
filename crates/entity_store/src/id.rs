//! Id generation strategies.

use std::collections::HashMap;
use std::fmt;

use entities::{EntityId, EntityKind};
use uuid::Uuid;

/// Produces candidate ids of the form `<kind>-<suffix>`.
///
/// The store re-draws when a candidate is already taken, so a generator only
/// has to avoid repeating itself. After 64 taken candidates in a row the store
/// stops asking and assigns a random UUID-suffixed id instead.
pub trait IdGenerator: fmt::Debug {
    /// Returns the next candidate id for `kind`.
    fn next_id(&mut self, kind: EntityKind) -> EntityId;
}

/// Random UUID v4 suffixes.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self, kind: EntityKind) -> EntityId {
        format!("{}-{}", kind.id_prefix(), Uuid::new_v4())
    }
}

/// Monotonic per-kind counters: `task-1`, `task-2`, ...
#[derive(Debug, Default, Clone)]
pub struct SequentialIdGenerator {
    counters: HashMap<EntityKind, u64>,
}

impl SequentialIdGenerator {
    /// Creates a generator whose counters all start at 1.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self, kind: EntityKind) -> EntityId {
        let counter = self.counters.entry(kind).or_insert(0);
        *counter += 1;
        format!("{}-{}", kind.id_prefix(), counter)
    }
}
