//! Full-screen rendering tests for every page and overlay

use super::view;
use crate::test_utils::{test_app_state, TestTerminal};
use cron_app::analysis::Pane;
use cron_app::config::Theme;
use cron_app::handler::update;
use cron_app::input_key::InputKey;
use cron_app::{AppState, Message, Route};

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

fn press(state: &mut AppState, key: InputKey) {
    let mut msg = Some(Message::Key(key));
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

#[test]
fn test_dashboard_screen() {
    let state = test_app_state();
    let term = draw(&state);

    assert!(term.line_contains(1, "CRON"));
    assert!(term.line_contains(1, "Dashboard"));
    assert!(term.buffer_contains("Welcome to CRON"));
    assert!(term.buffer_contains("Recent Projects"));
    assert!(term.line_contains(35, "[n] new project"));
}

#[test]
fn test_analysis_screen_has_three_panes() {
    let mut state = test_app_state();
    state.navigate(Route::parse("/analysis/1"));
    let term = draw(&state);

    assert!(term.line_contains(1, "Code Analysis"));
    assert!(term.line_contains(1, "E-commerce Frontend"));
    assert!(term.buffer_contains("Project Files"));
    assert!(term.buffer_contains("UserProfile.tsx"));
    assert!(term.buffer_contains("AI Suggestions"));
    assert!(term.buffer_contains("Remove infinite useEffect loop"));
}

#[test]
fn test_closed_panels_are_not_drawn() {
    let mut state = test_app_state();
    state.navigate(Route::parse("/analysis/1"));
    press(&mut state, InputKey::Char('['));
    press(&mut state, InputKey::Char(']'));
    let term = draw(&state);

    assert!(!term.buffer_contains("Project Files"));
    assert!(!term.buffer_contains("AI Suggestions"));
    assert!(term.buffer_contains("import React"));
}

#[test]
fn test_unknown_project_still_renders_analysis() {
    let mut state = test_app_state();
    state.navigate(Route::parse("/analysis/99"));
    let term = draw(&state);

    assert!(term.line_contains(1, "Code Analysis"));
    assert!(term.buffer_contains("Project Files"));
}

#[test]
fn test_focus_is_reflected_in_hints() {
    let mut state = test_app_state();
    state.navigate(Route::parse("/analysis/1"));
    state.analysis.as_mut().unwrap().focus = Pane::Tree;
    let term = draw(&state);
    assert!(term.line_contains(35, "[Enter] open"));
}

#[test]
fn test_settings_screen() {
    let mut state = test_app_state();
    state.navigate(Route::Settings);
    let term = draw(&state);

    assert!(term.line_contains(1, "Settings"));
    assert!(term.buffer_contains("1. General"));
    assert!(term.buffer_contains("Auto-switch themes"));
}

#[test]
fn test_help_screen() {
    let mut state = test_app_state();
    state.navigate(Route::Help);
    let term = draw(&state);

    assert!(term.line_contains(1, "Help & Support"));
    assert!(term.buffer_contains("Frequently Asked Questions"));
}

#[test]
fn test_not_found_screen() {
    let mut state = test_app_state();
    state.navigate(Route::parse("/reports"));
    let term = draw(&state);

    assert!(term.line_contains(1, "Not Found"));
    assert!(term.buffer_contains("404"));
    assert!(term.buffer_contains("/reports"));
}

#[test]
fn test_new_project_dialog_over_dashboard() {
    let mut state = test_app_state();
    press(&mut state, InputKey::Char('n'));
    let term = draw(&state);

    assert!(term.buffer_contains("Create New Project"));
    assert!(term.buffer_contains("Project Path *"));
    assert!(term.line_contains(35, "[Enter] create"));
}

#[test]
fn test_confirm_dialog_over_running_analysis() {
    let mut state = test_app_state();
    state.navigate(Route::parse("/analysis/1"));
    press(&mut state, InputKey::Char('r'));
    press(&mut state, InputKey::Char('q'));
    let term = draw(&state);

    assert!(term.buffer_contains("Quit CRON?"));
    assert!(term.buffer_contains("Code analysis is still in progress."));
    assert!(term.buffer_contains("Analyzing..."));
}

#[test]
fn test_toast_drawn_over_page() {
    let mut state = test_app_state();
    state.navigate(Route::parse("/analysis/1"));
    state.analysis.as_mut().unwrap().focus = Pane::Suggestions;
    press(&mut state, InputKey::Char('a'));
    let term = draw(&state);

    assert!(term.buffer_contains("Suggestion Applied"));
    assert_eq!(state.analysis.as_ref().unwrap().suggestions.total(), 2);
}

#[test]
fn test_theme_toggle_changes_accent() {
    let mut state = test_app_state();
    let before = draw(&state).buffer()[(2, 1)].bg;

    press(&mut state, InputKey::Char('t'));
    assert_eq!(state.settings.appearance.theme, Theme::DarkMatter);
    let term = draw(&state);
    assert_ne!(term.buffer()[(2, 1)].bg, before);
    assert!(term.line_contains(1, "Dark Matter"));
}
