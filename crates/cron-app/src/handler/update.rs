//! Main update function - handles state transitions (TEA pattern)
//!
//! Page-specific handlers live in:
//! - `analysis`: file tree, editor, suggestions
//! - `project`: new project dialog
//! - `settings_handlers`: settings page

use std::time::Instant;

use cron_core::prelude::*;

use crate::message::Message;
use crate::route::Route;
use crate::state::AppState;

use super::{analysis, keys::handle_key, project, settings_handlers, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.toasts.prune_expired(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation / header
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => {
            state.navigate(route);
            UpdateResult::none()
        }

        Message::ToggleTheme => {
            let theme = state.settings.appearance.theme.toggled();
            state.settings.appearance.theme = theme;
            state.settings_view.dirty = true;
            debug!("Theme switched to {}", theme.display_name());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dashboard
        // ─────────────────────────────────────────────────────────
        Message::DashboardUp => {
            state.dashboard.cursor_up();
            UpdateResult::none()
        }

        Message::DashboardDown => {
            state.dashboard.cursor_down();
            UpdateResult::none()
        }

        Message::OpenSelectedProject => match state.dashboard.selected_project() {
            Some(project) => UpdateResult::message(Message::Navigate(Route::Analysis {
                project_id: project.id.clone(),
            })),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // New Project Dialog
        // ─────────────────────────────────────────────────────────
        Message::OpenNewProjectDialog => project::handle_open(state),
        Message::CloseNewProjectDialog => project::handle_close(state),
        Message::NewProjectNextField => project::handle_focus(state, true),
        Message::NewProjectPrevField => project::handle_focus(state, false),
        Message::NewProjectInput(c) => project::handle_input(state, c),
        Message::NewProjectBackspace => project::handle_backspace(state),
        Message::NewProjectCycleLanguage { forward } => {
            project::handle_cycle_language(state, forward)
        }
        Message::NewProjectBrowse => project::handle_browse(state),
        Message::SubmitNewProject => project::handle_submit(state),
        Message::ProjectCreated { project } => project::handle_created(state, *project),

        // ─────────────────────────────────────────────────────────
        // Analysis view
        // ─────────────────────────────────────────────────────────
        Message::CycleFocus { forward } => analysis::handle_cycle_focus(state, forward),
        Message::ToggleTreePanel => analysis::handle_toggle_tree_panel(state),
        Message::ToggleSuggestionsPanel => analysis::handle_toggle_suggestions_panel(state),
        Message::TreeUp => analysis::handle_tree_up(state),
        Message::TreeDown => analysis::handle_tree_down(state),
        Message::TreeFirst => analysis::handle_tree_jump(state, false),
        Message::TreeLast => analysis::handle_tree_jump(state, true),
        Message::ActivateTreeRow => analysis::handle_activate_tree_row(state),
        Message::SelectFile { id } => analysis::handle_select_file(state, &id),
        Message::ToggleFolder { id } => analysis::handle_toggle_folder(state, &id),
        Message::EditorScrollUp(n) => analysis::handle_editor_scroll(state, n, false),
        Message::EditorScrollDown(n) => analysis::handle_editor_scroll(state, n, true),
        Message::EditorTop => analysis::handle_editor_jump(state, false),
        Message::EditorBottom => analysis::handle_editor_jump(state, true),
        Message::AnalyzeCode => analysis::handle_analyze_code(state),
        Message::AnalysisCompleted { mount_id } => {
            analysis::handle_analysis_completed(state, mount_id)
        }

        // ─────────────────────────────────────────────────────────
        // Suggestions panel
        // ─────────────────────────────────────────────────────────
        Message::SetSuggestionFilter(filter) => analysis::handle_set_filter(state, filter),
        Message::NextSuggestionTab => analysis::handle_suggestion_tab(state, true),
        Message::PrevSuggestionTab => analysis::handle_suggestion_tab(state, false),
        Message::SuggestionUp => analysis::handle_suggestion_cursor(state, false),
        Message::SuggestionDown => analysis::handle_suggestion_cursor(state, true),
        Message::ToggleSuggestion { id } => analysis::handle_toggle_suggestion(state, &id),
        Message::ApplySuggestion { id } => analysis::handle_apply_suggestion(state, &id),
        Message::DismissSuggestion { id } => analysis::handle_dismiss_suggestion(state, &id),

        // ─────────────────────────────────────────────────────────
        // Settings page
        // ─────────────────────────────────────────────────────────
        Message::SettingsNextTab => settings_handlers::handle_next_tab(state),
        Message::SettingsPrevTab => settings_handlers::handle_prev_tab(state),
        Message::SettingsUp => settings_handlers::handle_prev_item(state),
        Message::SettingsDown => settings_handlers::handle_next_item(state),
        Message::SettingsToggleSelected => settings_handlers::handle_toggle_selected(state),
        Message::SaveSettings => settings_handlers::handle_save(state),
        Message::SettingsSaved { error } => settings_handlers::handle_saved(state, error),
    }
}

