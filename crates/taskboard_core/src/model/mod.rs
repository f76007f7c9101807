//! Board domain model.
//!
//! # Responsibility
//! - Define the project record shared by the store, the lanes and the views.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - `status` is the only field that changes after creation.

pub mod project;
