//! Drop lane state machine.
//!
//! # Invariants
//! - A lane's target status is fixed at construction.
//! - `Idle -> HoverActive` only for a plain-text payload.
//! - Leave and drop always end in `Idle`.
//! - A drop only applies after the lane accepted the drag.

use crate::drag_drop::payload::{DragEvent, PLAIN_TEXT};
use crate::drag_drop::DragTarget;
use crate::model::project::{ProjectId, ProjectStatus};
use crate::state::project_store::{MoveOutcome, ProjectStore};
use log::debug;

/// Visual hover state of one lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    /// A drag with a recognized payload is over the lane.
    HoverActive,
}

/// Drop target statically bound to one project status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    status: ProjectStatus,
    hover: HoverState,
}

impl Lane {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            hover: HoverState::Idle,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn hover(&self) -> HoverState {
        self.hover
    }

    /// Whether the lane currently shows its droppable affordance.
    pub fn is_droppable(&self) -> bool {
        self.hover == HoverState::HoverActive
    }
}

impl DragTarget for Lane {
    fn drag_over(&mut self, event: &mut DragEvent) {
        if event.first_payload_kind() != Some(PLAIN_TEXT) {
            return;
        }
        event.prevent_default();
        if self.hover == HoverState::Idle {
            debug!(
                "event=lane_hover module=drag_drop status=enter lane={}",
                self.status
            );
        }
        self.hover = HoverState::HoverActive;
    }

    fn drag_leave(&mut self, _event: &DragEvent) {
        self.hover = HoverState::Idle;
    }

    fn drop_payload(&mut self, event: &DragEvent, store: &mut ProjectStore) -> MoveOutcome {
        let accepted = event.default_prevented() || self.hover == HoverState::HoverActive;
        self.hover = HoverState::Idle;
        if !accepted {
            debug!(
                "event=lane_drop module=drag_drop status=skipped reason=not_accepted lane={}",
                self.status
            );
            return MoveOutcome::DropRejected;
        }

        // The payload must be the id's exact text form; no trimming or
        // case folding.
        let payload = event.plain_text();
        match ProjectId::parse_str(payload) {
            Ok(id) if id.to_string() == payload => store.move_project(id, self.status),
            _ => {
                debug!(
                    "event=lane_drop module=drag_drop status=skipped reason=malformed_id lane={} payload_len={}",
                    self.status,
                    payload.len()
                );
                MoveOutcome::UnknownProject
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverState, Lane};
    use crate::drag_drop::payload::{DragEvent, PLAIN_TEXT};
    use crate::drag_drop::DragTarget;
    use crate::model::project::ProjectStatus;
    use crate::state::project_store::{MoveOutcome, ProjectStore};

    fn event_with(kind: &str, value: &str) -> DragEvent {
        let mut event = DragEvent::new();
        if let Some(transfer) = event.data_transfer.as_mut() {
            transfer.set_data(kind, value);
        }
        event
    }

    #[test]
    fn drag_over_ignores_non_text_payload() {
        let mut lane = Lane::new(ProjectStatus::Finished);
        let mut event = event_with("application/json", "{}");

        lane.drag_over(&mut event);

        assert_eq!(lane.hover(), HoverState::Idle);
        assert!(!event.default_prevented());
    }

    #[test]
    fn drag_over_then_leave_round_trips_hover() {
        let mut lane = Lane::new(ProjectStatus::Finished);
        let mut event = event_with(PLAIN_TEXT, "anything");

        lane.drag_over(&mut event);
        assert!(lane.is_droppable());
        assert!(event.default_prevented());

        lane.drag_leave(&event);
        assert_eq!(lane.hover(), HoverState::Idle);
    }

    #[test]
    fn malformed_payload_drop_is_absorbed() {
        let mut store = ProjectStore::new();
        store.add_project("Site", "Build site", 3);
        let mut lane = Lane::new(ProjectStatus::Finished);
        let mut event = event_with(PLAIN_TEXT, "0.123456789");
        lane.drag_over(&mut event);

        let outcome = lane.drop_payload(&event, &mut store);

        assert_eq!(outcome, MoveOutcome::UnknownProject);
        assert_eq!(lane.hover(), HoverState::Idle);
        assert_eq!(store.snapshot()[0].status, ProjectStatus::Active);
    }

    #[test]
    fn non_canonical_id_text_is_not_matched() {
        let mut store = ProjectStore::new();
        let id = store.add_project("Site", "Build site", 3);
        let canonical = id.to_string();
        let variants = [
            format!("  {canonical}  "),
            canonical.to_ascii_uppercase(),
            canonical.replace('-', ""),
        ];

        for payload in variants {
            let mut lane = Lane::new(ProjectStatus::Finished);
            let mut event = event_with(PLAIN_TEXT, &payload);
            lane.drag_over(&mut event);

            assert_eq!(
                lane.drop_payload(&event, &mut store),
                MoveOutcome::UnknownProject,
                "payload {payload:?} should not match"
            );
        }
        assert_eq!(store.get(id).unwrap().status, ProjectStatus::Active);
    }
}
