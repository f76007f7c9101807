//! Board composition root.
//!
//! # Responsibility
//! - Own the one `ProjectStore` of a board session and hand it explicitly to
//!   the form, the lane views and the drag-and-drop coordinator.
//! - Expose gesture-level entry points for a host UI.
//!
//! # Invariants
//! - Lane views are subscribed once, at construction, in lane order.
//! - Every store mutation flows through the form or the coordinator.

use crate::config::{BoardConfig, ConfigError};
use crate::drag_drop::coordinator::DragDropCoordinator;
use crate::drag_drop::lane::HoverState;
use crate::drag_drop::payload::DragEvent;
use crate::drag_drop::Draggable;
use crate::input::project_form::{InputValidationError, ProjectForm};
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::project_store::{MoveOutcome, ProjectStore};
use crate::view::lane_view::LaneView;
use crate::view::project_item::ProjectItem;
use crate::view::Component;

/// One board session: store, creation form, two lanes.
#[derive(Debug)]
pub struct TaskBoard {
    config: BoardConfig,
    store: ProjectStore,
    form: ProjectForm,
    lanes: [LaneView; 2],
    coordinator: DragDropCoordinator,
}

impl TaskBoard {
    /// Builds a board around a fresh store.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        Self::with_store(config, ProjectStore::new())
    }

    /// Builds a board around a caller-provided store.
    ///
    /// Lane views subscribe after any listeners already on `store`.
    pub fn with_store(config: BoardConfig, mut store: ProjectStore) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut lanes = ProjectStatus::all().map(LaneView::new);
        for lane in &mut lanes {
            lane.configure(&mut store);
        }
        Ok(Self {
            config,
            store,
            form: ProjectForm::new(),
            lanes,
            coordinator: DragDropCoordinator::new(),
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// Mutable store access for hosts that add their own listeners.
    pub fn store_mut(&mut self) -> &mut ProjectStore {
        &mut self.store
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProjectForm {
        &mut self.form
    }

    pub fn lane_view(&self, status: ProjectStatus) -> &LaneView {
        match status {
            ProjectStatus::Active => &self.lanes[0],
            ProjectStatus::Finished => &self.lanes[1],
        }
    }

    pub fn hover_state(&self, status: ProjectStatus) -> HoverState {
        self.coordinator.hover_state(status)
    }

    /// Submits the form as currently filled in.
    pub fn submit_form(&mut self) -> Result<ProjectId, InputValidationError> {
        self.form.submit(&mut self.store, &self.config.form)
    }

    /// Fills the form and submits it.
    pub fn submit_project(
        &mut self,
        title: &str,
        description: &str,
        people: &str,
    ) -> Result<ProjectId, InputValidationError> {
        self.form.fill(title, description, people);
        self.submit_form()
    }

    /// Starts dragging the card for `id`.
    ///
    /// Returns `None` when no such project exists. The returned event carries
    /// only the id; the card itself is not retained.
    pub fn start_drag(&self, id: ProjectId) -> Option<DragEvent> {
        let item = ProjectItem::new(self.store.get(id)?);
        let mut event = DragEvent::new();
        item.drag_start(&mut event);
        Some(event)
    }

    pub fn drag_over(&mut self, status: ProjectStatus, event: &mut DragEvent) {
        self.coordinator.drag_over(status, event);
    }

    pub fn drag_leave(&mut self, status: ProjectStatus, event: &DragEvent) {
        self.coordinator.drag_leave(status, event);
    }

    pub fn drop_on(&mut self, status: ProjectStatus, event: &DragEvent) -> MoveOutcome {
        self.coordinator.drop_on(status, event, &mut self.store)
    }

    /// Ends a drag gesture for `id`; never touches the store.
    pub fn end_drag(&self, id: ProjectId, event: &DragEvent) {
        if let Some(project) = self.store.get(id) {
            ProjectItem::new(project).drag_end(event);
        }
    }

    /// Projects currently listed by the lane for `status`.
    pub fn lane_projects(&self, status: ProjectStatus) -> Vec<Project> {
        self.lane_view(status).assigned_projects()
    }

    /// Renders both lanes; a hovered lane is marked with `*`.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        for lane in &self.lanes {
            let mut rendered = lane.render_content();
            if self.coordinator.lane(lane.status()).is_droppable() {
                if let Some(heading) = rendered.first_mut() {
                    heading.push_str(" *");
                }
            }
            lines.extend(rendered);
        }
        lines.join("\n")
    }
}
