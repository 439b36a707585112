//! Ordered, id-addressed collection of one entity kind.

use chrono::{DateTime, Utc};
use entities::{Entity, EntityId};

use crate::{IdGenerator, UuidIdGenerator};

/// Candidates drawn from the configured generator before falling back to
/// random ids.
const MAX_ID_ATTEMPTS: usize = 64;

/// Entities of one kind in insertion order.
#[derive(Debug, Clone)]
pub(crate) struct Collection<E> {
    items: Vec<E>,
}

impl<E> Default for Collection<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E: Entity> Collection<E> {
    pub(crate) fn from_items(items: Vec<E>) -> Self {
        Self { items }
    }

    pub(crate) fn as_slice(&self) -> &[E] {
        &self.items
    }

    pub(crate) fn get(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut E> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Appends a new entity built from `draft` under a fresh id.
    pub(crate) fn add(
        &mut self,
        draft: E::Draft,
        ids: &mut dyn IdGenerator,
        now: DateTime<Utc>,
    ) -> EntityId {
        let id = self.fresh_id(ids);
        self.items.push(E::from_draft(id.clone(), draft, now));
        id
    }

    fn fresh_id(&self, ids: &mut dyn IdGenerator) -> EntityId {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = ids.next_id(E::KIND);
            if !self.contains(&candidate) {
                return candidate;
            }
        }

        tracing::warn!(
            kind = %E::KIND,
            generator = ?ids,
            attempts = MAX_ID_ATTEMPTS,
            "Id generator keeps returning taken ids, falling back to random ids"
        );
        let mut fallback = UuidIdGenerator;
        loop {
            let candidate = fallback.next_id(E::KIND);
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Applies `patch` to the entity with `id`. Returns false if absent.
    pub(crate) fn update(&mut self, id: &str, patch: E::Patch) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Removes the entity with `id`. Returns false if absent.
    pub(crate) fn remove(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every entity matching `predicate` and returns their ids in
    /// collection order.
    pub(crate) fn remove_where(&mut self, mut predicate: impl FnMut(&E) -> bool) -> Vec<EntityId> {
        let mut removed = Vec::new();
        self.items.retain(|item| {
            if predicate(item) {
                removed.push(item.id().to_string());
                false
            } else {
                true
            }
        });
        removed
    }
}
