//! Per-mount state of the code analysis view.
//!
//! A fresh [`AnalysisView`] is built every time the analysis route is entered,
//! so suggestions removed in one visit come back on the next.

use cron_core::mock::{self, SAMPLE_FILE_NAME};
use cron_core::{FileNode, IssueAnnotation};
use serde::Serialize;

use crate::selection::SelectionState;
use crate::suggestions::SuggestionPanelState;

/// Focusable panes, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pane {
    Tree,
    Editor,
    Suggestions,
}

/// Read-only editor over the sample source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorState {
    #[serde(skip)]
    source: &'static str,
    /// First visible line (0-based)
    pub scroll: usize,
    pub analyzing: bool,
    /// Result line of the last finished analysis
    pub last_result: Option<String>,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            source: mock::SAMPLE_SOURCE,
            scroll: 0,
            analyzing: false,
            last_result: None,
        }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn line_count(&self) -> usize {
        self.source.lines().count()
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_add(amount).min(self.max_scroll());
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    fn max_scroll(&self) -> usize {
        self.line_count().saturating_sub(1)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisView {
    /// Identifies this mount; timers started by an earlier mount are ignored.
    pub mount_id: u64,
    pub project_id: String,
    /// Dashboard name of the project, when the id is known
    pub project_name: Option<String>,
    #[serde(skip)]
    pub tree: Vec<FileNode>,
    pub selection: SelectionState,
    pub suggestions: SuggestionPanelState,
    pub editor: EditorState,
    pub focus: Pane,
}

impl AnalysisView {
    pub fn new(mount_id: u64, project_id: impl Into<String>, project_name: Option<String>) -> Self {
        let tree = mock::seed_file_tree();
        let selection = SelectionState::new(&tree, Some(mock::DEFAULT_SELECTED_FILE));
        Self {
            mount_id,
            project_id: project_id.into(),
            project_name,
            tree,
            selection,
            suggestions: SuggestionPanelState::new(mock::seed_suggestions()),
            editor: EditorState::new(),
            focus: Pane::Editor,
        }
    }

    pub fn selected_node(&self) -> Option<&FileNode> {
        self.selection
            .selected_file
            .as_deref()
            .and_then(|id| FileNode::find(&self.tree, id))
    }

    /// File name shown in the editor header.
    pub fn editor_title(&self) -> &str {
        self.selected_node()
            .map(|n| n.name.as_str())
            .unwrap_or(SAMPLE_FILE_NAME)
    }

    pub fn selected_issues(&self) -> Option<IssueAnnotation> {
        self.selected_node().and_then(|n| n.issues)
    }

    /// Panes the user can currently focus.
    pub fn focusable_panes(&self) -> Vec<Pane> {
        let mut panes = Vec::with_capacity(3);
        if self.selection.tree_open {
            panes.push(Pane::Tree);
        }
        panes.push(Pane::Editor);
        if self.selection.suggestions_open {
            panes.push(Pane::Suggestions);
        }
        panes
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        let panes = self.focusable_panes();
        let pos = panes.iter().position(|p| *p == self.focus).unwrap_or(0);
        let next = if forward {
            (pos + 1) % panes.len()
        } else {
            (pos + panes.len() - 1) % panes.len()
        };
        self.focus = panes[next];
    }

    /// Move focus back to the editor if its pane was just hidden.
    pub fn fix_focus(&mut self) {
        if !self.focusable_panes().contains(&self.focus) {
            self.focus = Pane::Editor;
        }
    }

    /// Start the simulated analysis. Returns false if one is already running.
    pub fn start_analysis(&mut self) -> bool {
        if self.editor.analyzing {
            return false;
        }
        self.editor.analyzing = true;
        true
    }

    /// Finish the simulated analysis with the canned result.
    pub fn finish_analysis(&mut self) {
        self.editor.analyzing = false;
        self.editor.last_result = Some(mock::ANALYSIS_RESULT.to_string());
    }
}
