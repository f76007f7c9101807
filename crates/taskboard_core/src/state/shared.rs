//! Thread-safe store handle for multi-threaded hosts.
//!
//! Mutation and fan-out run inside one critical section, so every listener
//! of one mutation observes the same snapshot and no reader sees a
//! partially-applied change.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::listeners::Listener;
use crate::state::project_store::{MoveOutcome, ProjectStore};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle around one `ProjectStore`.
#[derive(Debug, Clone, Default)]
pub struct SharedProjectStore {
    inner: Arc<Mutex<ProjectStore>>,
}

impl SharedProjectStore {
    pub fn new(store: ProjectStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        self.lock().add_project(title, description, people)
    }

    pub fn move_project(&self, id: ProjectId, new_status: ProjectStatus) -> MoveOutcome {
        self.lock().move_project(id, new_status)
    }

    pub fn add_listener(&self, listener: Listener<Project>) {
        self.lock().add_listener(listener);
    }

    pub fn snapshot(&self) -> Vec<Project> {
        self.lock().snapshot()
    }

    /// Runs `f` with exclusive access to the store.
    ///
    /// Listeners run while the lock is held and must not call back into this
    /// handle.
    pub fn with_store<R>(&self, f: impl FnOnce(&mut ProjectStore) -> R) -> R {
        f(&mut self.lock())
    }

    // A poisoned lock only means a listener panicked after the mutation was
    // applied; the project sequence itself is always consistent.
    fn lock(&self) -> MutexGuard<'_, ProjectStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
