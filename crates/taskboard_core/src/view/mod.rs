//! Rendering collaborators.
//!
//! Views never hold references into the store; they keep their own copies
//! of the projects they were last notified about.

pub mod lane_view;
pub mod project_item;

use crate::state::project_store::ProjectStore;

/// Capability interface shared by every mountable view.
pub trait Component {
    /// Wires the view to the store. Views that need no subscription keep
    /// the default.
    fn configure(&mut self, _store: &mut ProjectStore) {}

    /// Renders the view as display lines.
    fn render_content(&self) -> Vec<String>;
}
