//! Authoritative in-memory state with observer fan-out.
//!
//! # Responsibility
//! - Own the single source of truth for board projects.
//! - Notify subscribers synchronously after every mutation.
//!
//! # Invariants
//! - Subscribers receive owned copies, never references into live state.
//! - Notification order equals registration order.
//! - Mutations take `&mut self`; a listener cannot reach the store while it
//!   is being notified, so reentrant mutation is unrepresentable.

pub mod listeners;
pub mod project_store;
pub mod shared;
