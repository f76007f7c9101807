//! Drag-and-drop status-transition protocol.
//!
//! # Responsibility
//! - Model the payload channel between a dragged card and a drop lane.
//! - Translate lane gestures into `ProjectStore::move_project` calls.
//!
//! # Invariants
//! - The payload (project id as plain text) is the only coupling between a
//!   drag source and a drop target; targets always re-resolve the id through
//!   the store.
//! - Drops never fail: unknown or malformed ids are absorbed as no-ops.

pub mod coordinator;
pub mod lane;
pub mod payload;

use crate::drag_drop::payload::DragEvent;
use crate::state::project_store::{MoveOutcome, ProjectStore};

/// Something that can be picked up and dragged.
pub trait Draggable {
    /// Writes the drag payload and allowed effect into `event`.
    fn drag_start(&self, event: &mut DragEvent);
    /// Called when the gesture ends, dropped or not.
    fn drag_end(&self, event: &DragEvent);
}

/// Something that accepts drops.
pub trait DragTarget {
    /// Handles a drag entering or moving over the target.
    fn drag_over(&mut self, event: &mut DragEvent);
    /// Handles a drag leaving the target.
    fn drag_leave(&mut self, event: &DragEvent);
    /// Handles a drop, applying its payload to `store`.
    fn drop_payload(&mut self, event: &DragEvent, store: &mut ProjectStore) -> MoveOutcome;
}
