//! Aggregate roots and their domain-event buffer.

use crate::entity::Entity;
use crate::event::DomainEvent;

/// Ordered, append-only buffer of domain events raised by an aggregate.
///
/// Read access only ever yields a shared slice; the backing storage is never handed out
/// mutably. Not synchronized: callers serialize `record`/`clear`/reads themselves, which
/// `&mut self` already enforces for safe code.
#[derive(Debug, Clone)]
pub struct DomainEvents<E> {
    events: Vec<E>,
}

impl<E: DomainEvent> DomainEvents<E> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event.
    pub fn record(&mut self, event: E) {
        tracing::trace!(
            event_type = event.event_type(),
            pending = self.events.len() + 1,
            "domain event recorded"
        );
        self.events.push(event);
    }

    /// Drop every pending event.
    pub fn clear(&mut self) {
        if !self.events.is_empty() {
            tracing::debug!(cleared = self.events.len(), "domain events cleared");
        }
        self.events.clear();
    }

    pub fn as_slice(&self) -> &[E] {
        &self.events
    }

    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<E: DomainEvent> Default for DomainEvents<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E: DomainEvent> IntoIterator for &'a DomainEvents<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Aggregate root: an entity that owns a buffer of the domain events it raised.
///
/// Implementors keep a [`DomainEvents`] field and record into it from their own
/// behaviour methods; outside code only gets to read the events and clear them.
pub trait AggregateRoot: Entity {
    type Event: DomainEvent;

    /// The aggregate's event buffer.
    fn events(&self) -> &DomainEvents<Self::Event>;

    /// Mutable access to the event buffer, for clearing.
    fn events_mut(&mut self) -> &mut DomainEvents<Self::Event>;

    /// Events raised since the last clear, oldest first.
    fn domain_events(&self) -> &[Self::Event] {
        self.events().as_slice()
    }

    fn clear_events(&mut self) {
        self.events_mut().clear();
    }
}
