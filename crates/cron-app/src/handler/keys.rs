//! Key event handlers for different UI modes and routes

use crate::analysis::Pane;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::new_project::FormField;
use crate::route::Route;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::NewProjectDialog => handle_key_new_project_dialog(state, key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events in the quit confirmation dialog
fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        // 'q' allows double-tap "qq" as quick quit shortcut
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the new project dialog
fn handle_key_new_project_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    // Inputs are locked while the project is being created; quitting still asks
    if state.new_project.submitting {
        return (key == InputKey::Char('q')).then_some(Message::RequestQuit);
    }

    let on_language = state.new_project.focused() == FormField::Language;

    match key {
        InputKey::Esc => Some(Message::CloseNewProjectDialog),
        InputKey::Tab | InputKey::Down => Some(Message::NewProjectNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::NewProjectPrevField),
        InputKey::Enter => Some(Message::SubmitNewProject),
        InputKey::CharCtrl('o') => Some(Message::NewProjectBrowse),

        InputKey::Left if on_language => Some(Message::NewProjectCycleLanguage { forward: false }),
        InputKey::Right | InputKey::Char(' ') if on_language => {
            Some(Message::NewProjectCycleLanguage { forward: true })
        }

        InputKey::Backspace => Some(Message::NewProjectBackspace),
        InputKey::Char(c) if !on_language => Some(Message::NewProjectInput(c)),

        _ => None,
    }
}

/// Handle key events on the page for the current route
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    // Global bindings, available on every page
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Char('q') => return Some(Message::RequestQuit),
        InputKey::Char('?') => return Some(Message::Navigate(Route::Help)),
        InputKey::Char(',') => return Some(Message::Navigate(Route::Settings)),
        InputKey::Char('t') => return Some(Message::ToggleTheme),
        InputKey::Esc if state.route != Route::Dashboard => {
            return Some(Message::Navigate(Route::Dashboard))
        }
        _ => {}
    }

    match &state.route {
        Route::Dashboard => handle_key_dashboard(key),
        Route::Analysis { .. } => handle_key_analysis(state, key),
        Route::Settings => handle_key_settings(key),
        Route::Help => None,
        Route::NotFound { .. } => handle_key_not_found(key),
    }
}

fn handle_key_dashboard(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('k') | InputKey::Up => Some(Message::DashboardUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::DashboardDown),
        InputKey::Enter => Some(Message::OpenSelectedProject),
        InputKey::Char('n') => Some(Message::OpenNewProjectDialog),
        _ => None,
    }
}

fn handle_key_analysis(state: &AppState, key: InputKey) -> Option<Message> {
    let view = state.analysis.as_ref()?;

    match key {
        InputKey::Tab => return Some(Message::CycleFocus { forward: true }),
        InputKey::BackTab => return Some(Message::CycleFocus { forward: false }),
        InputKey::Char('[') => return Some(Message::ToggleTreePanel),
        InputKey::Char(']') => return Some(Message::ToggleSuggestionsPanel),
        InputKey::Char('r') => return Some(Message::AnalyzeCode),
        _ => {}
    }

    match view.focus {
        Pane::Tree => match key {
            InputKey::Char('k') | InputKey::Up => Some(Message::TreeUp),
            InputKey::Char('j') | InputKey::Down => Some(Message::TreeDown),
            InputKey::Home => Some(Message::TreeFirst),
            InputKey::End => Some(Message::TreeLast),
            InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateTreeRow),
            _ => None,
        },

        Pane::Editor => match key {
            InputKey::Char('k') | InputKey::Up => Some(Message::EditorScrollUp(1)),
            InputKey::Char('j') | InputKey::Down => Some(Message::EditorScrollDown(1)),
            InputKey::PageUp => Some(Message::EditorScrollUp(10)),
            InputKey::PageDown => Some(Message::EditorScrollDown(10)),
            InputKey::Home | InputKey::Char('g') => Some(Message::EditorTop),
            InputKey::End | InputKey::Char('G') => Some(Message::EditorBottom),
            _ => None,
        },

        Pane::Suggestions => {
            let cursor_id = || view.suggestions.cursor_item().map(|s| s.id.clone());
            match key {
                InputKey::Char('k') | InputKey::Up => Some(Message::SuggestionUp),
                InputKey::Char('j') | InputKey::Down => Some(Message::SuggestionDown),
                InputKey::Char('h') | InputKey::Left => Some(Message::PrevSuggestionTab),
                InputKey::Char('l') | InputKey::Right => Some(Message::NextSuggestionTab),
                InputKey::Enter | InputKey::Char(' ') => {
                    cursor_id().map(|id| Message::ToggleSuggestion { id })
                }
                InputKey::Char('a') => cursor_id().map(|id| Message::ApplySuggestion { id }),
                InputKey::Char('x' | 'd') => {
                    cursor_id().map(|id| Message::DismissSuggestion { id })
                }
                _ => None,
            }
        }
    }
}

fn handle_key_settings(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Right | InputKey::Char('l') => Some(Message::SettingsNextTab),
        InputKey::BackTab | InputKey::Left | InputKey::Char('h') => Some(Message::SettingsPrevTab),
        InputKey::Char('j') | InputKey::Down => Some(Message::SettingsDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::SettingsUp),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::SettingsToggleSelected),
        InputKey::Char('s') | InputKey::CharCtrl('s') => Some(Message::SaveSettings),
        _ => None,
    }
}

fn handle_key_not_found(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::Navigate(Route::Dashboard)),
        InputKey::Char('h') => Some(Message::Navigate(Route::Help)),
        _ => None,
    }
}
