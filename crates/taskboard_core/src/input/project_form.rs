//! Project creation form.

use crate::config::FormRules;
use crate::input::validation::{validate, Validatable};
use crate::model::project::ProjectId;
use crate::state::project_store::ProjectStore;
use crate::view::Component;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validated input ready for `ProjectStore::add_project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// First invalid field found while gathering form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputValidationError {
    InvalidTitle,
    InvalidDescription,
    InvalidPeople,
}

impl InputValidationError {
    /// Name of the offending field.
    pub fn field(self) -> &'static str {
        match self {
            Self::InvalidTitle => "title",
            Self::InvalidDescription => "description",
            Self::InvalidPeople => "people",
        }
    }
}

impl Display for InputValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid input, please try again (field: {})", self.field())
    }
}

impl Error for InputValidationError {}

/// Raw text fields of the creation form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills all three fields at once.
    pub fn fill(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.people = people.into();
    }

    /// Validates the current fields against `rules`.
    pub fn gather_user_input(&self, rules: &FormRules) -> Result<ProjectDraft, InputValidationError> {
        let title = Validatable::text(self.title.as_str())
            .required()
            .max_length(rules.title_max_length);
        if !validate(&title) {
            return Err(InputValidationError::InvalidTitle);
        }

        let description = Validatable::text(self.description.as_str())
            .required()
            .min_length(rules.description_min_length)
            .max_length(rules.description_max_length);
        if !validate(&description) {
            return Err(InputValidationError::InvalidDescription);
        }

        let people_value = parse_people(&self.people);
        let people = Validatable::number(people_value)
            .required()
            .range(f64::from(rules.people_min), f64::from(rules.people_max));
        if !validate(&people) || people_value.fract() != 0.0 {
            return Err(InputValidationError::InvalidPeople);
        }

        Ok(ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            // In range [people_min, people_max] and integral, so it fits u32.
            people: people_value as u32,
        })
    }

    /// Validates and creates a project; clears the inputs on success.
    ///
    /// On failure the store is not called and inputs are kept for correction.
    pub fn submit(
        &mut self,
        store: &mut ProjectStore,
        rules: &FormRules,
    ) -> Result<ProjectId, InputValidationError> {
        let draft = match self.gather_user_input(rules) {
            Ok(draft) => draft,
            Err(err) => {
                warn!(
                    "event=form_submit module=input status=rejected field={}",
                    err.field()
                );
                return Err(err);
            }
        };
        let id = store.add_project(draft.title, draft.description, draft.people);
        info!(
            "event=form_submit module=input status=ok project_id={}",
            id
        );
        self.clear_inputs();
        Ok(id)
    }

    pub fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

impl Component for ProjectForm {
    fn render_content(&self) -> Vec<String> {
        vec![
            format!("Title: {}", self.title),
            format!("Description: {}", self.description),
            format!("People: {}", self.people),
        ]
    }
}

fn parse_people(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
