//! Core logic for the task board.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod config;
pub mod drag_drop;
pub mod input;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

pub use board::TaskBoard;
pub use config::{BoardConfig, ConfigError, FormRules, LoggingConfig};
pub use drag_drop::coordinator::DragDropCoordinator;
pub use drag_drop::lane::{HoverState, Lane};
pub use drag_drop::payload::{DataTransfer, DragEvent, DropEffect, PLAIN_TEXT};
pub use drag_drop::{DragTarget, Draggable};
pub use input::project_form::{InputValidationError, ProjectDraft, ProjectForm};
pub use input::validation::{validate, FieldValue, Validatable};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status, LoggingError};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use state::listeners::{Listener, ListenerRegistry};
pub use state::project_store::{IdSource, MoveOutcome, ProjectStore};
pub use state::shared::SharedProjectStore;
pub use view::lane_view::LaneView;
pub use view::project_item::ProjectItem;
pub use view::Component;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
