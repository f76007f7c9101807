//! Project creation input.
//!
//! # Responsibility
//! - Validate raw form fields before anything reaches the store.
//! - Submit valid drafts through `ProjectStore::add_project`.
//!
//! # Invariants
//! - Invalid input never calls the store.

pub mod project_form;
pub mod validation;
