//! Change notification for store consumers.

use entities::{EntityId, EntityKind};

/// What happened to an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Updated,
    Removed,
}

/// A single successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEvent {
    /// Kind of the affected entity.
    pub kind: EntityKind,
    /// Id of the affected entity.
    pub id: EntityId,
    /// What happened.
    pub change: ChangeKind,
}

impl StoreEvent {
    pub(crate) fn new(kind: EntityKind, id: impl Into<EntityId>, change: ChangeKind) -> Self {
        Self {
            kind,
            id: id.into(),
            change,
        }
    }
}

/// Receives store events synchronously after each successful mutation.
pub trait StoreObserver {
    fn on_event(&self, event: &StoreEvent);
}

impl<F> StoreObserver for F
where
    F: Fn(&StoreEvent),
{
    fn on_event(&self, event: &StoreEvent) {
        self(event)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registered observers in subscription order.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(SubscriptionId, Box<dyn StoreObserver>)>,
}

impl ObserverRegistry {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn StoreObserver>) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.observers.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub(crate) fn notify(&self, event: StoreEvent) {
        tracing::trace!(
            kind = %event.kind,
            id = %event.id,
            change = ?event.change,
            observers = self.observers.len(),
            "Notifying observers"
        );
        for (_, observer) in &self.observers {
            observer.on_event(&event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }
}
