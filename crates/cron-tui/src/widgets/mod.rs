//! Widget components for the TUI

mod code_editor;
mod confirm_dialog;
mod dashboard;
mod file_tree;
mod header;
mod help_page;
pub mod modal_overlay;
mod new_project_dialog;
mod not_found;
mod settings_page;
mod status_bar;
mod suggestions_panel;
mod toast;

pub use code_editor::CodeEditor;
pub use confirm_dialog::ConfirmDialog;
pub use dashboard::Dashboard;
pub use file_tree::FileTree;
pub use header::MainHeader;
pub use help_page::HelpPage;
pub use new_project_dialog::NewProjectDialog;
pub use not_found::NotFound;
pub use settings_page::SettingsPage;
pub use status_bar::{key_hints, StatusBar};
pub use suggestions_panel::SuggestionsPanel;
pub use toast::ToastStack;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` display columns, ending in "..." when
/// anything was dropped.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

/// Greedy word wrap to `width` display columns. Words longer than a line are
/// truncated.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = truncate_with_ellipsis(word, width);
        if current.is_empty() {
            current = word;
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
