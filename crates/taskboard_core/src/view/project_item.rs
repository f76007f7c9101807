//! Project card: rendering plus the drag-source side of the protocol.

use crate::drag_drop::payload::{DragEvent, DropEffect, PLAIN_TEXT};
use crate::drag_drop::Draggable;
use crate::model::project::Project;
use crate::view::Component;
use log::debug;

/// Card for one project inside a lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    project: Project,
}

impl ProjectItem {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Element id of the mounted card; equal to the project id.
    pub fn element_id(&self) -> String {
        self.project.id.to_string()
    }
}

impl Component for ProjectItem {
    fn render_content(&self) -> Vec<String> {
        vec![
            self.project.title.clone(),
            format!("{} assigned", self.project.persons_label()),
            self.project.description.clone(),
        ]
    }
}

impl Draggable for ProjectItem {
    fn drag_start(&self, event: &mut DragEvent) {
        let transfer = event.data_transfer.get_or_insert_with(Default::default);
        transfer.set_data(PLAIN_TEXT, self.project.id.to_string());
        transfer.effect_allowed = DropEffect::Move;
        debug!(
            "event=card_drag module=view status=start project_id={}",
            self.project.id
        );
    }

    fn drag_end(&self, _event: &DragEvent) {
        debug!(
            "event=card_drag module=view status=end project_id={}",
            self.project.id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectItem;
    use crate::drag_drop::payload::{DragEvent, DropEffect, PLAIN_TEXT};
    use crate::drag_drop::Draggable;
    use crate::model::project::Project;
    use crate::view::Component;
    use uuid::Uuid;

    #[test]
    fn drag_start_writes_id_as_plain_text() {
        let project = Project::new(Uuid::new_v4(), "Site", "Build site", 3);
        let item = ProjectItem::new(project.clone());
        let mut event = DragEvent::without_transfer();

        item.drag_start(&mut event);

        let transfer = event.data_transfer.as_ref().unwrap();
        assert_eq!(transfer.get_data(PLAIN_TEXT), project.id.to_string());
        assert_eq!(transfer.effect_allowed, DropEffect::Move);
        assert_eq!(event.first_payload_kind(), Some(PLAIN_TEXT));
    }

    #[test]
    fn renders_title_people_and_description() {
        let item = ProjectItem::new(Project::new(Uuid::new_v4(), "Solo", "One person job", 1));
        assert_eq!(
            item.render_content(),
            vec!["Solo", "1 person assigned", "One person job"]
        );
    }
}
