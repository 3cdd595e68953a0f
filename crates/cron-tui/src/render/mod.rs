//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use cron_app::analysis::{AnalysisView, Pane};
use cron_app::config::Theme;
use cron_app::state::{AppState, UiMode};
use cron_app::Route;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: the page for the current route first, then
/// the dialogs and toasts stacked on top of it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let theme = state.settings.appearance.theme;

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    let project_name = state
        .analysis
        .as_ref()
        .and_then(|view| view.project_name.as_deref());
    frame.render_widget(
        widgets::MainHeader::new(&state.route, theme).project_name(project_name),
        areas.header,
    );

    render_page(frame, state, areas.body, theme);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if state.new_project_dialog_visible() {
        frame.render_widget(widgets::NewProjectDialog::new(&state.new_project, theme), area);
    }
    if state.ui_mode == UiMode::ConfirmDialog {
        if let Some(dialog) = &state.confirm_dialog_state {
            frame.render_widget(widgets::ConfirmDialog::new(dialog, theme), area);
        }
    }
    if !state.toasts.is_empty() {
        frame.render_widget(widgets::ToastStack::new(&state.toasts, theme), area);
    }
}

fn render_page(frame: &mut Frame, state: &AppState, body: Rect, theme: Theme) {
    match &state.route {
        Route::Dashboard => {
            frame.render_widget(widgets::Dashboard::new(&state.dashboard, theme), body);
        }
        Route::Analysis { .. } => {
            if let Some(view) = &state.analysis {
                render_analysis(frame, view, body, theme);
            }
        }
        Route::Settings => {
            frame.render_widget(
                widgets::SettingsPage::new(
                    &state.settings,
                    &state.settings_view,
                    &state.config_dir,
                ),
                body,
            );
        }
        Route::Help => frame.render_widget(widgets::HelpPage::new(theme), body),
        Route::NotFound { path } => {
            frame.render_widget(widgets::NotFound::new(path, theme), body);
        }
    }
}

fn render_analysis(frame: &mut Frame, view: &AnalysisView, body: Rect, theme: Theme) {
    let panes = layout::analysis_panes(
        body,
        view.selection.tree_open,
        view.selection.suggestions_open,
    );

    if let Some(tree) = panes.tree {
        frame.render_widget(
            widgets::FileTree::new(view, theme, view.focus == Pane::Tree),
            tree,
        );
    }
    frame.render_widget(
        widgets::CodeEditor::new(view, theme, view.focus == Pane::Editor),
        panes.editor,
    );
    if let Some(suggestions) = panes.suggestions {
        frame.render_widget(
            widgets::SuggestionsPanel::new(view, theme, view.focus == Pane::Suggestions),
            suggestions,
        );
    }
}
