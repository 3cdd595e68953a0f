//! Tests for handler module

use std::path::PathBuf;

use cron_core::{CategoryFilter, SuggestionCategory};

use super::*;
use crate::analysis::Pane;
use crate::config::SettingsTab;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::new_project::FormField;
use crate::notifications::ToastVariant;
use crate::route::Route;
use crate::state::{AppState, UiMode};

fn test_state() -> AppState {
    AppState::new(Settings::default(), PathBuf::from("/tmp/cron-test"))
}

fn analysis_state() -> AppState {
    let mut state = test_state();
    update(&mut state, Message::Navigate(Route::parse("/analysis/1")));
    state
}

/// Process a message and any follow-up messages, returning the last action.
fn dispatch(state: &mut AppState, msg: Message) -> Option<UpdateAction> {
    let mut next = Some(msg);
    let mut action = None;
    while let Some(msg) = next {
        let result = update(state, msg);
        next = result.message;
        if result.action.is_some() {
            action = result.action;
        }
    }
    action
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        dispatch(state, Message::Key(InputKey::Char(c)));
    }
}

fn visible_ids(state: &AppState) -> Vec<String> {
    state
        .analysis
        .as_ref()
        .unwrap()
        .suggestions
        .visible()
        .iter()
        .map(|s| s.id.clone())
        .collect()
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = test_state();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_request_quit_message() {
    let state = test_state();
    assert_eq!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::RequestQuit)
    );
}

#[test]
fn test_ctrl_c_produces_quit_message_in_every_mode() {
    let mut state = test_state();
    for mode in [UiMode::Normal, UiMode::NewProjectDialog, UiMode::ConfirmDialog] {
        state.ui_mode = mode;
        assert_eq!(
            handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit),
            "{:?}",
            mode
        );
    }
}

#[test]
fn test_quit_during_analysis_asks_first() {
    let mut state = analysis_state();
    dispatch(&mut state, Message::Key(InputKey::Char('r')));
    dispatch(&mut state, Message::Key(InputKey::Char('q')));
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    assert!(!state.should_quit());

    dispatch(&mut state, Message::Key(InputKey::Char('y')));
    assert!(state.should_quit());
}

#[test]
fn test_tick_prunes_nothing_fresh() {
    let mut state = test_state();
    state.toasts.info("Hello", "world");
    update(&mut state, Message::Tick);
    assert_eq!(state.toasts.len(), 1);
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_global_navigation_keys() {
    let state = test_state();
    assert_eq!(
        handle_key(&state, InputKey::Char('?')),
        Some(Message::Navigate(Route::Help))
    );
    assert_eq!(
        handle_key(&state, InputKey::Char(',')),
        Some(Message::Navigate(Route::Settings))
    );
    // Esc does nothing on the dashboard itself
    assert_eq!(handle_key(&state, InputKey::Esc), None);
}

#[test]
fn test_esc_returns_to_dashboard() {
    let mut state = analysis_state();
    dispatch(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.route, Route::Dashboard);
    assert!(state.analysis.is_none());
}

#[test]
fn test_enter_on_dashboard_opens_selected_project() {
    let mut state = test_state();
    dispatch(&mut state, Message::Key(InputKey::Down));
    dispatch(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(
        state.route,
        Route::Analysis {
            project_id: "2".into()
        }
    );
    assert_eq!(
        state.analysis.as_ref().unwrap().project_name.as_deref(),
        Some("API Gateway")
    );
}

#[test]
fn test_not_found_route_keys() {
    let mut state = test_state();
    update(&mut state, Message::Navigate(Route::parse("/nope")));
    assert!(matches!(state.route, Route::NotFound { .. }));

    dispatch(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.route, Route::Dashboard);
}

#[test]
fn test_toggle_theme_marks_settings_dirty() {
    let mut state = test_state();
    let before = state.settings.appearance.theme;
    dispatch(&mut state, Message::Key(InputKey::Char('t')));
    assert_ne!(state.settings.appearance.theme, before);
    assert!(state.settings_view.dirty);
}

// ─────────────────────────────────────────────────────────
// File tree selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_default_selection_on_mount() {
    let state = analysis_state();
    let view = state.analysis.as_ref().unwrap();
    assert_eq!(view.selection.selected_file.as_deref(), Some("3"));
    assert!(view.selection.tree_open);
    assert!(view.selection.suggestions_open);
}

#[test]
fn test_select_file_updates_editor_title() {
    let mut state = analysis_state();
    update(&mut state, Message::SelectFile { id: "6".into() });
    let view = state.analysis.as_ref().unwrap();
    assert_eq!(view.editor_title(), "api.ts");
    assert_eq!(view.selected_issues().unwrap().count, 5);
}

#[test]
fn test_select_folder_is_ignored() {
    let mut state = analysis_state();
    update(&mut state, Message::SelectFile { id: "2".into() });
    let view = state.analysis.as_ref().unwrap();
    assert_eq!(view.selection.selected_file.as_deref(), Some("3"));
}

#[test]
fn test_tree_keys_activate_cursor_row() {
    let mut state = analysis_state();
    state.analysis.as_mut().unwrap().focus = Pane::Tree;
    state.analysis.as_mut().unwrap().selection.cursor = 0;

    // Row 0 is the `src` folder: Enter collapses it
    dispatch(&mut state, Message::Key(InputKey::Enter));
    let view = state.analysis.as_ref().unwrap();
    assert!(!view.selection.is_expanded("1"));
    assert_eq!(view.selection.visible_rows(&view.tree).len(), 2);

    // Row 1 is package.json: Enter selects it
    dispatch(&mut state, Message::Key(InputKey::Down));
    dispatch(&mut state, Message::Key(InputKey::Enter));
    let view = state.analysis.as_ref().unwrap();
    assert_eq!(view.selection.selected_file.as_deref(), Some("8"));
    assert_eq!(view.editor_title(), "package.json");
}

#[test]
fn test_panel_toggles_are_independent() {
    let mut state = analysis_state();
    dispatch(&mut state, Message::Key(InputKey::Char('[')));
    {
        let view = state.analysis.as_ref().unwrap();
        assert!(!view.selection.tree_open);
        assert!(view.selection.suggestions_open);
        assert_eq!(view.selection.selected_file.as_deref(), Some("3"));
    }

    dispatch(&mut state, Message::Key(InputKey::Char('[')));
    let view = state.analysis.as_ref().unwrap();
    assert!(view.selection.tree_open);
}

#[test]
fn test_closing_focused_panel_moves_focus_to_editor() {
    let mut state = analysis_state();
    dispatch(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.analysis.as_ref().unwrap().focus, Pane::Suggestions);

    dispatch(&mut state, Message::Key(InputKey::Char(']')));
    assert_eq!(state.analysis.as_ref().unwrap().focus, Pane::Editor);
}

#[test]
fn test_editor_keys_scroll() {
    let mut state = analysis_state();
    dispatch(&mut state, Message::Key(InputKey::PageDown));
    assert_eq!(state.analysis.as_ref().unwrap().editor.scroll, 10);
    dispatch(&mut state, Message::Key(InputKey::Up));
    assert_eq!(state.analysis.as_ref().unwrap().editor.scroll, 9);
}

#[test]
fn test_editor_home_and_end_jump() {
    let mut state = analysis_state();
    dispatch(&mut state, Message::Key(InputKey::End));
    let editor = &state.analysis.as_ref().unwrap().editor;
    assert_eq!(editor.scroll, editor.line_count() - 1);

    dispatch(&mut state, Message::Key(InputKey::Home));
    assert_eq!(state.analysis.as_ref().unwrap().editor.scroll, 0);
}

#[test]
fn test_tree_home_and_end_jump() {
    let mut state = analysis_state();
    state.analysis.as_mut().unwrap().focus = Pane::Tree;

    dispatch(&mut state, Message::Key(InputKey::Home));
    assert_eq!(state.analysis.as_ref().unwrap().selection.cursor, 0);

    // src, components, utils, package.json
    dispatch(&mut state, Message::Key(InputKey::End));
    assert_eq!(state.analysis.as_ref().unwrap().selection.cursor, 3);
}

#[test]
fn test_analysis_messages_without_view_are_noops() {
    let mut state = test_state();
    let result = update(&mut state, Message::AnalyzeCode);
    assert!(result.action.is_none());
    update(&mut state, Message::ApplySuggestion { id: "1".into() });
    assert!(state.toasts.is_empty());
}

// ─────────────────────────────────────────────────────────
// Analysis lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_analyze_emits_simulated_action() {
    let mut state = analysis_state();
    let mount_id = state.analysis.as_ref().unwrap().mount_id;

    let action = dispatch(&mut state, Message::Key(InputKey::Char('r')));
    assert_eq!(
        action,
        Some(UpdateAction::SimulateAnalysis {
            mount_id,
            delay: Duration::from_millis(2000),
        })
    );
    assert!(state.analysis.as_ref().unwrap().editor.analyzing);

    // Second request while running is ignored
    assert!(dispatch(&mut state, Message::AnalyzeCode).is_none());
}

#[test]
fn test_analysis_completion_shows_result() {
    let mut state = analysis_state();
    let mount_id = state.analysis.as_ref().unwrap().mount_id;
    update(&mut state, Message::AnalyzeCode);
    update(&mut state, Message::AnalysisCompleted { mount_id });

    let view = state.analysis.as_ref().unwrap();
    assert!(!view.editor.analyzing);
    assert_eq!(
        view.editor.last_result.as_deref(),
        Some("Analysis complete - 3 optimization opportunities found")
    );
    assert_eq!(state.toasts.latest().unwrap().title, "Analysis Complete");
}

#[test]
fn test_analysis_toast_respects_notification_setting() {
    let mut state = analysis_state();
    state.settings.notifications.analysis_complete = false;
    let mount_id = state.analysis.as_ref().unwrap().mount_id;
    update(&mut state, Message::AnalyzeCode);
    update(&mut state, Message::AnalysisCompleted { mount_id });
    assert!(state.toasts.is_empty());
    assert!(!state.analysis.as_ref().unwrap().editor.analyzing);
}

#[test]
fn test_stale_analysis_completion_is_ignored() {
    let mut state = analysis_state();
    let old_mount = state.analysis.as_ref().unwrap().mount_id;
    update(&mut state, Message::AnalyzeCode);

    // Leave and come back before the timer fires
    update(&mut state, Message::Navigate(Route::Dashboard));
    update(&mut state, Message::Navigate(Route::parse("/analysis/1")));
    update(&mut state, Message::AnalyzeCode);

    update(&mut state, Message::AnalysisCompleted { mount_id: old_mount });
    let view = state.analysis.as_ref().unwrap();
    assert!(view.editor.analyzing);
    assert!(view.editor.last_result.is_none());
    assert!(state.toasts.is_empty());
}

// ─────────────────────────────────────────────────────────
// Suggestions
// ─────────────────────────────────────────────────────────

#[test]
fn test_apply_removes_and_notifies() {
    let mut state = analysis_state();
    update(&mut state, Message::ApplySuggestion { id: "1".into() });

    assert_eq!(visible_ids(&state), ["2", "3"]);
    let toast = state.toasts.latest().unwrap();
    assert_eq!(toast.title, "Suggestion Applied");
    assert_eq!(toast.description, "Remove infinite useEffect loop");
}

#[test]
fn test_dismiss_removes_silently() {
    let mut state = analysis_state();
    update(&mut state, Message::ApplySuggestion { id: "1".into() });
    update(&mut state, Message::DismissSuggestion { id: "2".into() });

    assert_eq!(visible_ids(&state), ["3"]);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn test_apply_unknown_id_is_noop() {
    let mut state = analysis_state();
    update(&mut state, Message::ApplySuggestion { id: "42".into() });
    assert_eq!(visible_ids(&state), ["1", "2", "3"]);
    assert!(state.toasts.is_empty());
}

#[test]
fn test_suggestion_keys_act_on_cursor() {
    let mut state = analysis_state();
    state.analysis.as_mut().unwrap().focus = Pane::Suggestions;

    dispatch(&mut state, Message::Key(InputKey::Enter));
    assert!(state.analysis.as_ref().unwrap().suggestions.get("1").unwrap().expanded);

    dispatch(&mut state, Message::Key(InputKey::Down));
    dispatch(&mut state, Message::Key(InputKey::Char('x')));
    assert_eq!(visible_ids(&state), ["1", "3"]);

    dispatch(&mut state, Message::Key(InputKey::Char('a')));
    assert_eq!(visible_ids(&state), ["1"]);
}

#[test]
fn test_category_tabs_filter() {
    let mut state = analysis_state();
    update(
        &mut state,
        Message::SetSuggestionFilter(CategoryFilter::Only(SuggestionCategory::Refactoring)),
    );
    assert_eq!(visible_ids(&state), ["2"]);

    update(
        &mut state,
        Message::SetSuggestionFilter(CategoryFilter::Only(SuggestionCategory::Security)),
    );
    assert!(visible_ids(&state).is_empty());

    state.analysis.as_mut().unwrap().focus = Pane::Suggestions;
    dispatch(&mut state, Message::Key(InputKey::Right));
    assert_eq!(
        state.analysis.as_ref().unwrap().suggestions.filter,
        CategoryFilter::All
    );
}

#[test]
fn test_suggestions_reset_on_remount() {
    let mut state = analysis_state();
    update(&mut state, Message::DismissSuggestion { id: "3".into() });
    update(&mut state, Message::Navigate(Route::Help));
    update(&mut state, Message::Navigate(Route::parse("/analysis/1")));
    assert_eq!(visible_ids(&state), ["1", "2", "3"]);
}

// ─────────────────────────────────────────────────────────
// New project dialog
// ─────────────────────────────────────────────────────────

fn open_dialog(state: &mut AppState) {
    dispatch(state, Message::Key(InputKey::Char('n')));
    assert_eq!(state.ui_mode, UiMode::NewProjectDialog);
}

fn fill_required(state: &mut AppState) {
    type_text(state, "Demo");
    dispatch(state, Message::Key(InputKey::Tab));
    type_text(state, "/tmp/demo");
    dispatch(state, Message::Key(InputKey::Tab));
    dispatch(state, Message::Key(InputKey::Right));
}

#[test]
fn test_new_project_dialog_only_from_dashboard() {
    let mut state = analysis_state();
    update(&mut state, Message::OpenNewProjectDialog);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_typing_goes_to_focused_field() {
    let mut state = test_state();
    open_dialog(&mut state);
    // 'q' is text here, not quit
    type_text(&mut state, "qa");
    assert_eq!(state.new_project.name, "qa");
    assert!(!state.should_quit());

    dispatch(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(state.new_project.name, "q");
}

#[test]
fn test_submit_with_missing_fields_shows_error() {
    let mut state = test_state();
    open_dialog(&mut state);
    type_text(&mut state, "Demo");

    let action = dispatch(&mut state, Message::Key(InputKey::Enter));
    assert!(action.is_none());
    assert!(!state.new_project.submitting);
    assert_eq!(state.ui_mode, UiMode::NewProjectDialog);

    let toast = state.toasts.latest().unwrap();
    assert_eq!(toast.title, "Missing Information");
    assert_eq!(toast.variant, ToastVariant::Destructive);
}

#[test]
fn test_quit_during_project_creation_asks_first() {
    let mut state = test_state();
    open_dialog(&mut state);
    fill_required(&mut state);
    dispatch(&mut state, Message::Key(InputKey::Enter));
    assert!(state.new_project.submitting);

    dispatch(&mut state, Message::Key(InputKey::Char('q')));
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    assert!(!state.should_quit());
    let dialog = state.confirm_dialog_state.as_ref().unwrap();
    assert!(dialog.message.contains("Project creation"));

    dispatch(&mut state, Message::Key(InputKey::Char('n')));
    assert_eq!(state.ui_mode, UiMode::NewProjectDialog);
}

#[test]
fn test_submit_valid_form_creates_project() {
    let mut state = test_state();
    open_dialog(&mut state);
    fill_required(&mut state);

    let action = dispatch(&mut state, Message::Key(InputKey::Enter));
    let Some(UpdateAction::CreateProject { draft, delay }) = action else {
        panic!("expected CreateProject, got {:?}", action);
    };
    assert_eq!(delay, PROJECT_CREATION_DELAY);
    assert_eq!(draft.language, "TypeScript");
    assert!(state.new_project.submitting);

    // Inputs are locked while submitting
    assert_eq!(handle_key(&state, InputKey::Esc), None);
    assert_eq!(handle_key(&state, InputKey::Char('x')), None);
    assert_eq!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::RequestQuit)
    );

    let project = draft.into_project(chrono::Utc::now());
    update(
        &mut state,
        Message::ProjectCreated {
            project: Box::new(project),
        },
    );

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(!state.new_project.submitting);
    assert!(state.new_project.name.is_empty());
    assert_eq!(state.dashboard.projects.len(), 4);
    assert_eq!(
        state.toasts.latest().unwrap().description,
        "Demo has been added successfully."
    );
}

#[test]
fn test_duplicate_path_reports_failure() {
    let mut state = test_state();
    open_dialog(&mut state);
    let existing = state.dashboard.projects[0].path.clone();
    type_text(&mut state, "Copy");
    dispatch(&mut state, Message::Key(InputKey::Tab));
    type_text(&mut state, &existing);
    dispatch(&mut state, Message::Key(InputKey::Tab));
    dispatch(&mut state, Message::Key(InputKey::Char(' ')));

    let Some(UpdateAction::CreateProject { draft, .. }) =
        dispatch(&mut state, Message::SubmitNewProject)
    else {
        panic!("expected CreateProject");
    };
    update(
        &mut state,
        Message::ProjectCreated {
            project: Box::new(draft.into_project(chrono::Utc::now())),
        },
    );

    assert_eq!(state.dashboard.projects.len(), 3);
    assert_eq!(state.ui_mode, UiMode::NewProjectDialog);
    assert_eq!(state.new_project.name, "Copy");
    let toast = state.toasts.latest().unwrap();
    assert_eq!(toast.title, "Error");
    assert_eq!(toast.variant, ToastVariant::Destructive);
}

#[test]
fn test_browse_focuses_path_field() {
    let mut state = test_state();
    open_dialog(&mut state);
    dispatch(&mut state, Message::Key(InputKey::CharCtrl('o')));
    assert_eq!(state.new_project.focused(), FormField::Path);
    assert_eq!(state.toasts.latest().unwrap().title, "File Browser");
}

#[test]
fn test_esc_closes_dialog_and_keeps_draft() {
    let mut state = test_state();
    open_dialog(&mut state);
    type_text(&mut state, "Half");
    dispatch(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.new_project.name, "Half");
}

// ─────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────

#[test]
fn test_settings_toggle_and_save() {
    let mut state = test_state();
    update(&mut state, Message::Navigate(Route::Settings));

    // Second row on General is auto-switch themes
    dispatch(&mut state, Message::Key(InputKey::Down));
    dispatch(&mut state, Message::Key(InputKey::Enter));
    assert!(state.settings.appearance.auto_switch_theme);
    assert!(state.settings_view.dirty);

    let action = dispatch(&mut state, Message::Key(InputKey::Char('s')));
    assert!(matches!(action, Some(UpdateAction::SaveSettings { .. })));
    assert!(state.settings_view.saving);

    update(&mut state, Message::SettingsSaved { error: None });
    assert!(!state.settings_view.saving);
    assert!(!state.settings_view.dirty);
    assert_eq!(state.toasts.latest().unwrap().title, "Settings Saved");
}

#[test]
fn test_settings_save_failure_keeps_dirty() {
    let mut state = test_state();
    state.settings_view.dirty = true;
    update(&mut state, Message::SaveSettings);
    update(
        &mut state,
        Message::SettingsSaved {
            error: Some("disk full".into()),
        },
    );
    assert!(state.settings_view.dirty);
    let toast = state.toasts.latest().unwrap();
    assert_eq!(toast.title, "Save Failed");
    assert_eq!(toast.variant, ToastVariant::Destructive);
}

#[test]
fn test_theme_toggle_stays_unsaved_across_navigation() {
    let mut state = test_state();
    update(&mut state, Message::ToggleTheme);
    update(&mut state, Message::Navigate(Route::Settings));
    assert!(state.settings_view.dirty);

    // A save in flight is not restarted by a second request
    assert!(update(&mut state, Message::SaveSettings).action.is_some());
    update(&mut state, Message::Navigate(Route::Help));
    update(&mut state, Message::Navigate(Route::Settings));
    assert!(update(&mut state, Message::SaveSettings).action.is_none());
}

#[test]
fn test_readonly_setting_does_not_dirty() {
    let mut state = test_state();
    update(&mut state, Message::Navigate(Route::Settings));
    // Integrations, first row: the VS Code status
    update(&mut state, Message::SettingsNextTab);
    update(&mut state, Message::SettingsNextTab);
    assert_eq!(state.settings_view.active_tab, SettingsTab::Integrations);

    let before = state.settings.clone();
    update(&mut state, Message::SettingsToggleSelected);
    assert!(!state.settings_view.dirty);
    assert_eq!(state.settings, before);
}
