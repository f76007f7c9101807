//! Routes drag gestures to the two board lanes.

use crate::drag_drop::lane::{HoverState, Lane};
use crate::drag_drop::payload::DragEvent;
use crate::drag_drop::DragTarget;
use crate::model::project::ProjectStatus;
use crate::state::project_store::{MoveOutcome, ProjectStore};
use log::info;

/// Owns the `active` and `finished` drop lanes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragDropCoordinator {
    active: Lane,
    finished: Lane,
}

impl DragDropCoordinator {
    pub fn new() -> Self {
        Self {
            active: Lane::new(ProjectStatus::Active),
            finished: Lane::new(ProjectStatus::Finished),
        }
    }

    pub fn lane(&self, status: ProjectStatus) -> &Lane {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    fn lane_mut(&mut self, status: ProjectStatus) -> &mut Lane {
        match status {
            ProjectStatus::Active => &mut self.active,
            ProjectStatus::Finished => &mut self.finished,
        }
    }

    pub fn hover_state(&self, status: ProjectStatus) -> HoverState {
        self.lane(status).hover()
    }

    /// Handles drag-enter/drag-over on the lane for `status`.
    pub fn drag_over(&mut self, status: ProjectStatus, event: &mut DragEvent) {
        self.lane_mut(status).drag_over(event);
    }

    /// Handles drag-leave on the lane for `status`.
    pub fn drag_leave(&mut self, status: ProjectStatus, event: &DragEvent) {
        self.lane_mut(status).drag_leave(event);
    }

    /// Handles a drop on the lane for `status`.
    pub fn drop_on(
        &mut self,
        status: ProjectStatus,
        event: &DragEvent,
        store: &mut ProjectStore,
    ) -> MoveOutcome {
        let outcome = self.lane_mut(status).drop_payload(event, store);
        info!(
            "event=lane_drop module=drag_drop status=done lane={} outcome={:?}",
            status, outcome
        );
        outcome
    }
}

impl Default for DragDropCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
