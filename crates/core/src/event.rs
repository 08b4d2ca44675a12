//! Domain events recorded by aggregate roots.

use chrono::{DateTime, Utc};

/// A domain event.
///
/// Events are **immutable** facts. The shared kernel only stores them; publishing is
/// left to whatever application layer drains an aggregate's buffer.
pub trait DomainEvent: core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "order.placed").
    fn event_type(&self) -> &'static str;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
