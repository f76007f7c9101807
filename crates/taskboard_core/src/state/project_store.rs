//! Project store: creation, status transitions and subscriptions.
//!
//! # Responsibility
//! - Hold the ordered project sequence (insertion order, never reordered).
//! - Generate collision-free ids for new projects.
//! - Fan out a full snapshot to every listener after each mutation.
//!
//! # Invariants
//! - Exactly one record exists per `ProjectId`; records are never deleted.
//! - New projects are always `Active`.
//! - Unknown-id and same-status moves are silent no-ops with no notification.
//! - The store performs no input validation and never returns errors.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::listeners::{Listener, ListenerRegistry};
use log::{debug, info, warn};
use uuid::Uuid;

/// Colliding candidates tolerated from an id source before falling back to
/// random ids.
const MAX_SOURCE_ATTEMPTS: usize = 16;

/// Source of candidate ids for new projects.
pub type IdSource = Box<dyn FnMut() -> ProjectId + Send + 'static>;

/// Result of a status transition request.
///
/// Only `Moved` changes state and notifies listeners; the other variants are
/// absorbed no-ops reported for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Status changed and listeners were notified.
    Moved,
    /// No project with the requested id exists.
    UnknownProject,
    /// The project already has the requested status.
    AlreadyInStatus,
    /// The drop target never accepted the drag, so the drop was ignored.
    DropRejected,
}

/// Authoritative owner of all board projects.
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: ListenerRegistry<Project>,
    next_id: IdSource,
}

impl ProjectStore {
    /// Creates an empty store that assigns random (v4) ids.
    pub fn new() -> Self {
        Self::with_id_source(Box::new(Uuid::new_v4))
    }

    /// Creates an empty store drawing candidate ids from `next_id`.
    ///
    /// Candidates that collide with an existing project are discarded. After
    /// 16 consecutive collisions the store stops asking `next_id` for that
    /// project and assigns a random v4 id instead.
    pub fn with_id_source(next_id: IdSource) -> Self {
        Self {
            projects: Vec::new(),
            listeners: ListenerRegistry::new(),
            next_id,
        }
    }

    /// Appends a new `Active` project and notifies listeners.
    ///
    /// Returns the id assigned to the created project.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let id = self.fresh_id();
        self.projects
            .push(Project::new(id, title, description, people));
        info!(
            "event=project_add module=state status=ok project_id={} total={}",
            id,
            self.projects.len()
        );
        self.update_listeners();
        id
    }

    /// Moves one project to `new_status`.
    ///
    /// Notifies listeners only when the status actually changes.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) -> MoveOutcome {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            debug!(
                "event=project_move module=state status=skipped reason=unknown_id project_id={}",
                id
            );
            return MoveOutcome::UnknownProject;
        };
        if project.status == new_status {
            debug!(
                "event=project_move module=state status=skipped reason=same_status project_id={} target={}",
                id, new_status
            );
            return MoveOutcome::AlreadyInStatus;
        }

        let previous = project.status;
        project.set_status(new_status);
        info!(
            "event=project_move module=state status=ok project_id={} from={} to={}",
            id, previous, new_status
        );
        self.update_listeners();
        MoveOutcome::Moved
    }

    /// Registers a listener for future mutations.
    ///
    /// The listener is not invoked with the current state; call `snapshot`
    /// when the current projects are needed up front.
    pub fn add_listener(&mut self, listener: Listener<Project>) {
        self.listeners.add_listener(listener);
        debug!(
            "event=listener_add module=state status=ok listeners={}",
            self.listeners.len()
        );
    }

    /// Returns a copy of all projects in creation order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Returns a copy of one project.
    pub fn get(&self, id: ProjectId) -> Option<Project> {
        self.projects.iter().find(|project| project.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn fresh_id(&mut self) -> ProjectId {
        for _ in 0..MAX_SOURCE_ATTEMPTS {
            let candidate = (self.next_id)();
            if !self.contains(candidate) {
                return candidate;
            }
            debug!(
                "event=project_id module=state status=retry reason=collision project_id={}",
                candidate
            );
        }
        warn!(
            "event=project_id module=state status=fallback reason=source_exhausted attempts={}",
            MAX_SOURCE_ATTEMPTS
        );
        loop {
            let candidate = Uuid::new_v4();
            if !self.contains(candidate) {
                return candidate;
            }
        }
    }

    fn contains(&self, id: ProjectId) -> bool {
        self.projects.iter().any(|project| project.id == id)
    }

    fn update_listeners(&mut self) {
        self.listeners.notify(&self.projects);
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
