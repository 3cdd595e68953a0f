//! Settings page handlers
//!
//! Handles navigation, toggling, and persistence of settings.

use cron_core::prelude::*;

use crate::settings_items::{items_for_tab, toggle_item};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

fn item_count(state: &AppState) -> usize {
    items_for_tab(&state.settings, state.settings_view.active_tab).len()
}

pub fn handle_next_tab(state: &mut AppState) -> UpdateResult {
    state.settings_view.next_tab();
    UpdateResult::none()
}

pub fn handle_prev_tab(state: &mut AppState) -> UpdateResult {
    state.settings_view.prev_tab();
    UpdateResult::none()
}

pub fn handle_next_item(state: &mut AppState) -> UpdateResult {
    let count = item_count(state);
    state.settings_view.select_next(count);
    UpdateResult::none()
}

pub fn handle_prev_item(state: &mut AppState) -> UpdateResult {
    let count = item_count(state);
    state.settings_view.select_previous(count);
    UpdateResult::none()
}

/// Flip the selected row. Read-only rows are left alone.
pub fn handle_toggle_selected(state: &mut AppState) -> UpdateResult {
    let items = items_for_tab(&state.settings, state.settings_view.active_tab);
    let Some(item) = items.get(state.settings_view.selected_index) else {
        return UpdateResult::none();
    };

    if toggle_item(&mut state.settings, &item.id) {
        debug!("Toggled setting {}", item.id);
        state.settings_view.dirty = true;
    }
    UpdateResult::none()
}

pub fn handle_save(state: &mut AppState) -> UpdateResult {
    if state.settings_view.saving {
        return UpdateResult::none();
    }
    state.settings_view.saving = true;
    UpdateResult::action(UpdateAction::SaveSettings {
        config_dir: state.config_dir.clone(),
        settings: Box::new(state.settings.clone()),
    })
}

pub fn handle_saved(state: &mut AppState, error: Option<String>) -> UpdateResult {
    state.settings_view.saving = false;
    match error {
        None => {
            info!("Settings saved to {}", state.config_dir.display());
            state.settings_view.dirty = false;
            state
                .toasts
                .info("Settings Saved", "Your preferences have been updated.");
        }
        Some(e) => {
            error!("Failed to save settings: {}", e);
            state.toasts.error("Save Failed", e);
        }
    }
    UpdateResult::none()
}
