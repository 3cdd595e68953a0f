//! New project dialog handlers

use cron_core::prelude::*;
use cron_core::Project;

use crate::new_project::FormField;
use crate::route::Route;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult, PROJECT_CREATION_DELAY};

pub fn handle_open(state: &mut AppState) -> UpdateResult {
    if state.route == Route::Dashboard {
        state.show_new_project_dialog();
    }
    UpdateResult::none()
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    if !state.new_project.submitting {
        state.hide_new_project_dialog();
    }
    UpdateResult::none()
}

pub fn handle_focus(state: &mut AppState, forward: bool) -> UpdateResult {
    if state.new_project.submitting {
        return UpdateResult::none();
    }
    if forward {
        state.new_project.focus_next();
    } else {
        state.new_project.focus_prev();
    }
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    if !state.new_project.submitting {
        state.new_project.input_char(c);
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if !state.new_project.submitting {
        state.new_project.backspace();
    }
    UpdateResult::none()
}

pub fn handle_cycle_language(state: &mut AppState, forward: bool) -> UpdateResult {
    if !state.new_project.submitting {
        state.new_project.cycle_language(forward);
    }
    UpdateResult::none()
}

/// There is no native picker; tell the user and put them on the path field.
pub fn handle_browse(state: &mut AppState) -> UpdateResult {
    if state.new_project.submitting {
        return UpdateResult::none();
    }
    state.toasts.info(
        "File Browser",
        "In a real app, this would open your system's file browser.",
    );
    state.new_project.focus = Some(FormField::Path);
    UpdateResult::none()
}

pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.new_project.submitting {
        return UpdateResult::none();
    }

    match state.new_project.validate() {
        Ok(draft) => {
            info!("Creating project '{}' at {}", draft.name, draft.path);
            state.new_project.submitting = true;
            UpdateResult::action(UpdateAction::CreateProject {
                draft,
                delay: PROJECT_CREATION_DELAY,
            })
        }
        Err(e) => {
            warn!("New project rejected: {}", e);
            state
                .toasts
                .error("Missing Information", "Please fill in all required fields.");
            UpdateResult::none()
        }
    }
}

pub fn handle_created(state: &mut AppState, project: Project) -> UpdateResult {
    state.new_project.submitting = false;

    let name = project.name.clone();
    match state.dashboard.add_project(project) {
        Ok(()) => {
            state.toasts.info(
                "Project Created",
                format!("{} has been added successfully.", name),
            );
            state.new_project.reset();
            state.hide_new_project_dialog();
        }
        Err(e) => {
            error!("Error creating project: {}", e);
            state
                .toasts
                .error("Error", "Failed to create project. Please try again.");
        }
    }
    UpdateResult::none()
}
