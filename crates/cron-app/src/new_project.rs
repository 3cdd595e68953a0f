//! New project dialog state and validation.

use chrono::{DateTime, Utc};
use cron_core::mock::LANGUAGES;
use cron_core::{Project, ProjectStatus};
use serde::Serialize;
use thiserror::Error;

/// Form fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Path,
    Language,
    Description,
    GitRepository,
}

impl FormField {
    pub const ORDER: [FormField; 5] = [
        FormField::Name,
        FormField::Path,
        FormField::Language,
        FormField::Description,
        FormField::GitRepository,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Project Name *",
            FormField::Path => "Project Path *",
            FormField::Language => "Primary Language *",
            FormField::Description => "Description",
            FormField::GitRepository => "Git Repository (Optional)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "e.g., My Awesome App",
            FormField::Path => "/path/to/your/project",
            FormField::Language => "Select primary language",
            FormField::Description => "Brief description of your project...",
            FormField::GitRepository => "https://github.com/username/repo",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FormField::Name | FormField::Path | FormField::Language
        )
    }

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectFormError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequired(Vec<&'static str>),
}

/// Validated form content, ready to become a [`Project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub path: String,
    pub language: String,
    pub description: Option<String>,
    pub git_repository: Option<String>,
}

impl ProjectDraft {
    /// Build the project record. The id is the creation time in milliseconds.
    pub fn into_project(self, created_at: DateTime<Utc>) -> Project {
        Project {
            id: created_at.timestamp_millis().to_string(),
            name: self.name,
            path: self.path,
            last_analyzed: "Never".to_string(),
            issues_found: 0,
            issues_fixed: 0,
            language: self.language,
            status: ProjectStatus::Pending,
            description: self.description,
            git_repository: self.git_repository,
            created_at: Some(created_at),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewProjectForm {
    pub name: String,
    pub path: String,
    /// Index into [`LANGUAGES`]
    pub language: Option<usize>,
    pub description: String,
    pub git_repository: String,
    pub focus: Option<FormField>,
    pub submitting: bool,
}

impl NewProjectForm {
    pub fn new() -> Self {
        Self {
            focus: Some(FormField::Name),
            ..Self::default()
        }
    }

    pub fn focused(&self) -> FormField {
        self.focus.unwrap_or(FormField::Name)
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(self.focused().next());
    }

    pub fn focus_prev(&mut self) {
        self.focus = Some(self.focused().prev());
    }

    pub fn language_name(&self) -> Option<&'static str> {
        self.language.and_then(|i| LANGUAGES.get(i).copied())
    }

    /// Step through the language list; the first step picks the first entry.
    pub fn cycle_language(&mut self, forward: bool) {
        let len = LANGUAGES.len();
        self.language = Some(match (self.language, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        });
    }

    fn text_field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Path => Some(&mut self.path),
            FormField::Description => Some(&mut self.description),
            FormField::GitRepository => Some(&mut self.git_repository),
            FormField::Language => None,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Path => &self.path,
            FormField::Language => self.language_name().unwrap_or(""),
            FormField::Description => &self.description,
            FormField::GitRepository => &self.git_repository,
        }
    }

    /// Type into the focused field. The language field takes no text.
    pub fn input_char(&mut self, c: char) {
        let field = self.focused();
        if let Some(text) = self.text_field_mut(field) {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focused();
        if let Some(text) = self.text_field_mut(field) {
            text.pop();
        } else {
            self.language = None;
        }
    }

    pub fn validate(&self) -> Result<ProjectDraft, ProjectFormError> {
        let missing: Vec<&'static str> = FormField::ORDER
            .iter()
            .filter(|f| f.is_required() && self.value(**f).trim().is_empty())
            .map(|f| match f {
                FormField::Name => "name",
                FormField::Path => "path",
                _ => "language",
            })
            .collect();

        if !missing.is_empty() {
            return Err(ProjectFormError::MissingRequired(missing));
        }

        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        Ok(ProjectDraft {
            name: self.name.trim().to_string(),
            path: self.path.trim().to_string(),
            language: self.value(FormField::Language).to_string(),
            description: optional(&self.description),
            git_repository: optional(&self.git_repository),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
