//! `cleanplate-core`: shared kernel building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! structural value objects, entities, aggregate roots and their domain-event buffer.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod event;
pub mod id;
pub mod value_object;

// Lets `#[derive(ValueObject)]` resolve `::cleanplate_core` inside this crate's own tests.
extern crate self as cleanplate_core;

pub use aggregate::{AggregateRoot, DomainEvents};
pub use cleanplate_macros::ValueObject;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use event::DomainEvent;
pub use id::EntityId;
pub use value_object::{MemberHasher, StructuralEq, ValueObject, value_eq, value_ne};
