//! Bottom status bar: key hints for the current page or dialog

use cron_app::analysis::Pane;
use cron_app::state::{AppState, UiMode};
use cron_app::Route;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// `(key, action)` pairs shown for the current mode and route.
pub fn key_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    match state.ui_mode {
        UiMode::ConfirmDialog => return vec![("y", "quit"), ("n", "cancel")],
        UiMode::NewProjectDialog => {
            return vec![
                ("Tab", "next field"),
                ("←/→", "language"),
                ("^O", "browse"),
                ("Enter", "create"),
                ("Esc", "cancel"),
            ]
        }
        UiMode::Normal => {}
    }

    let mut hints = match &state.route {
        Route::Dashboard => vec![("↑/↓", "select"), ("Enter", "open"), ("n", "new project")],
        Route::Analysis { .. } => {
            let mut hints = vec![("Tab", "focus"), ("[ ]", "panels"), ("r", "analyze")];
            match state.analysis.as_ref().map(|v| v.focus) {
                Some(Pane::Tree) => hints.push(("Enter", "open")),
                Some(Pane::Suggestions) => hints.extend([
                    ("←/→", "category"),
                    ("Enter", "details"),
                    ("a", "apply"),
                    ("x", "dismiss"),
                ]),
                Some(Pane::Editor) | None => hints.push(("PgUp/PgDn", "scroll")),
            }
            hints
        }
        Route::Settings => vec![("←/→", "tab"), ("Enter", "toggle"), ("s", "save")],
        Route::Help => vec![],
        Route::NotFound { .. } => vec![("Enter", "dashboard"), ("h", "help")],
    };

    if state.route != Route::Dashboard {
        hints.push(("Esc", "back"));
    }
    hints.extend([("t", "theme"), ("?", "help"), ("q", "quit")]);
    hints
}

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.state.settings.appearance.theme;
        buf.set_style(area, Style::default().bg(palette::CARD_BG));

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in key_hints(self.state) {
            spans.push(Span::styled(format!("[{}]", key), styles::keybinding(theme)));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }

        if self.state.settings_view.dirty {
            spans.push(Span::styled("● unsaved settings", styles::status_yellow()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
