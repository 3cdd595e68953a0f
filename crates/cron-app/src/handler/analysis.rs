//! Analysis view handlers: file tree, editor and suggestions panel
//!
//! Every handler is a no-op unless the analysis route is mounted.

use std::time::Duration;

use cron_core::mock::ANALYSIS_RESULT;
use cron_core::prelude::*;
use cron_core::{CategoryFilter, FileNode};

use crate::analysis::AnalysisView;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Run `f` against the mounted view, if any.
fn with_view(state: &mut AppState, f: impl FnOnce(&mut AnalysisView)) -> UpdateResult {
    if let Some(view) = state.analysis.as_mut() {
        f(view);
    }
    UpdateResult::none()
}

pub fn handle_cycle_focus(state: &mut AppState, forward: bool) -> UpdateResult {
    with_view(state, |view| view.cycle_focus(forward))
}

pub fn handle_toggle_tree_panel(state: &mut AppState) -> UpdateResult {
    with_view(state, |view| {
        view.selection.toggle_tree_panel();
        view.fix_focus();
    })
}

pub fn handle_toggle_suggestions_panel(state: &mut AppState) -> UpdateResult {
    with_view(state, |view| {
        view.selection.toggle_suggestions_panel();
        view.fix_focus();
    })
}

pub fn handle_tree_up(state: &mut AppState) -> UpdateResult {
    with_view(state, |view| view.selection.cursor_up())
}

pub fn handle_tree_down(state: &mut AppState) -> UpdateResult {
    with_view(state, |view| view.selection.cursor_down(&view.tree))
}

pub fn handle_tree_jump(state: &mut AppState, last: bool) -> UpdateResult {
    with_view(state, |view| {
        if last {
            view.selection.cursor_last(&view.tree);
        } else {
            view.selection.cursor_first();
        }
    })
}

pub fn handle_activate_tree_row(state: &mut AppState) -> UpdateResult {
    with_view(state, |view| {
        let Some(node) = view.selection.cursor_node(&view.tree).cloned() else {
            return;
        };
        view.selection.activate(&node);
        view.selection.clamp_cursor(&view.tree);
        if !node.is_folder() {
            debug!("Selected file {} ({})", node.name, node.id);
        }
    })
}

pub fn handle_select_file(state: &mut AppState, id: &str) -> UpdateResult {
    with_view(state, |view| {
        if let Some(node) = FileNode::find(&view.tree, id) {
            view.selection.select_file(node);
        }
    })
}

pub fn handle_toggle_folder(state: &mut AppState, id: &str) -> UpdateResult {
    with_view(state, |view| {
        view.selection.toggle_folder(&view.tree, id);
        view.selection.clamp_cursor(&view.tree);
    })
}

pub fn handle_editor_scroll(state: &mut AppState, amount: usize, down: bool) -> UpdateResult {
    with_view(state, |view| {
        if down {
            view.editor.scroll_down(amount);
        } else {
            view.editor.scroll_up(amount);
        }
    })
}

pub fn handle_editor_jump(state: &mut AppState, bottom: bool) -> UpdateResult {
    with_view(state, |view| {
        if bottom {
            view.editor.scroll_to_bottom();
        } else {
            view.editor.scroll = 0;
        }
    })
}

pub fn handle_analyze_code(state: &mut AppState) -> UpdateResult {
    let delay = Duration::from_millis(state.settings.analysis.delay_ms);
    let Some(view) = state.analysis.as_mut() else {
        return UpdateResult::none();
    };

    if !view.start_analysis() {
        debug!("Analysis already running for mount {}", view.mount_id);
        return UpdateResult::none();
    }

    info!("Analyzing {} for project {}", view.editor_title(), view.project_id);
    UpdateResult::action(UpdateAction::SimulateAnalysis {
        mount_id: view.mount_id,
        delay,
    })
}

/// Completions for a view that has since been unmounted are dropped.
pub fn handle_analysis_completed(state: &mut AppState, mount_id: u64) -> UpdateResult {
    let notify = state.settings.notifications.analysis_complete;
    let Some(view) = state
        .analysis
        .as_mut()
        .filter(|v| v.mount_id == mount_id && v.editor.analyzing)
    else {
        debug!("Ignoring stale analysis completion for mount {}", mount_id);
        return UpdateResult::none();
    };

    view.finish_analysis();
    info!("{}", ANALYSIS_RESULT);
    if notify {
        state.toasts.info("Analysis Complete", ANALYSIS_RESULT);
    }
    UpdateResult::none()
}

pub fn handle_set_filter(state: &mut AppState, filter: CategoryFilter) -> UpdateResult {
    with_view(state, |view| view.suggestions.set_filter(filter))
}

pub fn handle_suggestion_tab(state: &mut AppState, forward: bool) -> UpdateResult {
    with_view(state, |view| {
        if forward {
            view.suggestions.next_tab();
        } else {
            view.suggestions.prev_tab();
        }
    })
}

pub fn handle_suggestion_cursor(state: &mut AppState, down: bool) -> UpdateResult {
    with_view(state, |view| {
        if down {
            view.suggestions.cursor_down();
        } else {
            view.suggestions.cursor_up();
        }
    })
}

pub fn handle_toggle_suggestion(state: &mut AppState, id: &str) -> UpdateResult {
    with_view(state, |view| view.suggestions.toggle_expanded(id))
}

pub fn handle_apply_suggestion(state: &mut AppState, id: &str) -> UpdateResult {
    let applied = state
        .analysis
        .as_mut()
        .and_then(|view| view.suggestions.apply(id));

    if let Some(suggestion) = applied {
        info!("Applying suggestion: {}", suggestion.id);
        state.toasts.info("Suggestion Applied", suggestion.title);
    }
    UpdateResult::none()
}

pub fn handle_dismiss_suggestion(state: &mut AppState, id: &str) -> UpdateResult {
    with_view(state, |view| {
        if let Some(suggestion) = view.suggestions.dismiss(id) {
            info!("Dismissing suggestion: {}", suggestion.id);
        }
    })
}
