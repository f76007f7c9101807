//! Lane list view.
//!
//! # Invariants
//! - A lane only lists projects whose status matches its own.
//! - The assigned list is replaced wholesale on each notification.

use crate::model::project::{Project, ProjectStatus};
use crate::state::project_store::ProjectStore;
use crate::view::project_item::ProjectItem;
use crate::view::Component;
use log::debug;
use std::sync::{Arc, Mutex, PoisonError};

/// Rendered list for one status lane.
#[derive(Debug, Clone)]
pub struct LaneView {
    status: ProjectStatus,
    assigned: Arc<Mutex<Vec<Project>>>,
}

impl LaneView {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            assigned: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Element id of the lane section, e.g. `active-projects`.
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.status)
    }

    /// Element id of the lane's card list, e.g. `active-projects-list`.
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status)
    }

    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_ascii_uppercase())
    }

    /// Copy of the projects this lane was last notified about.
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.assigned
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Component for LaneView {
    fn configure(&mut self, store: &mut ProjectStore) {
        let status = self.status;
        let assigned = Arc::clone(&self.assigned);
        store.add_listener(Box::new(move |projects: Vec<Project>| {
            let relevant: Vec<Project> = projects
                .into_iter()
                .filter(|project| project.is_in(status))
                .collect();
            debug!(
                "event=lane_render module=view status=ok lane={} count={}",
                status,
                relevant.len()
            );
            *assigned.lock().unwrap_or_else(PoisonError::into_inner) = relevant;
        }));
    }

    fn render_content(&self) -> Vec<String> {
        let mut lines = vec![self.heading()];
        for project in self.assigned_projects() {
            let item = ProjectItem::new(project);
            lines.extend(
                item.render_content()
                    .into_iter()
                    .map(|line| format!("  {line}")),
            );
        }
        lines
    }
}
