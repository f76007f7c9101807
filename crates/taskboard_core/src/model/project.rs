//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record and its two-valued status.
//! - Provide display helpers used by card rendering.
//!
//! # Invariants
//! - `id` is assigned at creation and never reused for another project.
//! - A freshly constructed project is always `Active`.
//! - Status changes go through `ProjectStore::move_project` only.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one project.
///
/// Its hyphenated string form is the payload carried by drag gestures.
pub type ProjectId = Uuid;

/// Lane assignment of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work still in progress. Every new project starts here.
    Active,
    /// Work completed.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase name used in logs and lane ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Parses a lane/status name (case-insensitive, trimmed).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }

    /// Both statuses in lane display order.
    pub fn all() -> [Self; 2] {
        [Self::Active, Self::Finished]
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable id, unique within one store.
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned; positive.
    pub people: u32,
    /// Current lane.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates an `Active` project with the given id.
    pub fn new(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Human-readable head count, e.g. `1 person` or `3 persons`.
    pub fn persons_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }

    /// Returns whether this project belongs to the given lane.
    pub fn is_in(&self, status: ProjectStatus) -> bool {
        self.status == status
    }

    pub(crate) fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }
}
