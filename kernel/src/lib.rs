//! Persistence contract shared by the board's bounded contexts.
//!
//! The backing store is a generic record store: every entity type gets the
//! same list/get/insert/update/delete surface, and concrete stores implement
//! these traits per entity. Default bodies bail so partial implementations
//! (and partial mocks) only have to provide what they are actually asked for.

pub mod repository;

pub use repository::{AggregateRoot, DBRepository, MutableRepository, ReadOnlyRepository};
