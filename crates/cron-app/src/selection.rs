//! File-tree selection state machine.
//!
//! State is {no file | file X selected} × {tree panel open/closed} ×
//! {suggestions panel open/closed}, plus per-folder expansion and a keyboard
//! cursor. Every transition is a direct toggle with no validation.

use std::collections::HashSet;

use cron_core::FileNode;
use serde::Serialize;

/// One visible line of the flattened tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeRow<'a> {
    pub node: &'a FileNode,
    pub depth: usize,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub selected_file: Option<String>,
    pub tree_open: bool,
    pub suggestions_open: bool,
    /// Folder ids currently expanded
    expanded: HashSet<String>,
    /// Index into the visible rows
    pub cursor: usize,
}

impl SelectionState {
    /// Initial state: `selected` chosen, both panels open, root folders expanded.
    pub fn new(tree: &[FileNode], selected: Option<&str>) -> Self {
        let expanded = tree
            .iter()
            .filter(|n| n.is_folder())
            .map(|n| n.id.clone())
            .collect();

        let mut state = Self {
            selected_file: selected.map(str::to_string),
            tree_open: true,
            suggestions_open: true,
            expanded,
            cursor: 0,
        };
        state.sync_cursor_to_selection(tree);
        state
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_file.as_deref() == Some(id)
    }

    /// Make a file the selected file. Folders are ignored.
    pub fn select_file(&mut self, node: &FileNode) {
        if node.is_folder() {
            return;
        }
        self.selected_file = Some(node.id.clone());
    }

    /// Flip one folder. Unknown ids and files are ignored.
    pub fn toggle_folder(&mut self, tree: &[FileNode], id: &str) {
        if let Some(node) = FileNode::find(tree, id) {
            self.toggle_node(node);
        }
    }

    /// Click semantics: folders toggle expansion, files become selected.
    pub fn activate(&mut self, node: &FileNode) {
        if node.is_folder() {
            self.toggle_node(node);
        } else {
            self.select_file(node);
        }
    }

    /// Collapsing a folder also collapses everything below it, so a later
    /// expand shows only its direct children.
    fn toggle_node(&mut self, node: &FileNode) {
        if !node.is_folder() {
            return;
        }
        if self.expanded.remove(&node.id) {
            self.forget_descendants(node.children());
        } else {
            self.expanded.insert(node.id.clone());
        }
    }

    fn forget_descendants(&mut self, nodes: &[FileNode]) {
        for node in nodes {
            self.expanded.remove(&node.id);
            self.forget_descendants(node.children());
        }
    }

    pub fn toggle_tree_panel(&mut self) {
        self.tree_open = !self.tree_open;
    }

    pub fn toggle_suggestions_panel(&mut self) {
        self.suggestions_open = !self.suggestions_open;
    }

    /// Depth-first flattening; children of collapsed folders are skipped.
    pub fn visible_rows<'a>(&self, tree: &'a [FileNode]) -> Vec<TreeRow<'a>> {
        let mut rows = Vec::new();
        self.collect_visible(tree, 0, &mut rows);
        rows
    }

    fn collect_visible<'a>(&self, nodes: &'a [FileNode], depth: usize, out: &mut Vec<TreeRow<'a>>) {
        for node in nodes {
            let expanded = node.is_folder() && self.is_expanded(&node.id);
            out.push(TreeRow {
                node,
                depth,
                expanded,
            });
            if expanded {
                self.collect_visible(node.children(), depth + 1, out);
            }
        }
    }

    /// Node under the cursor, if any row is visible.
    pub fn cursor_node<'a>(&self, tree: &'a [FileNode]) -> Option<&'a FileNode> {
        self.visible_rows(tree).get(self.cursor).map(|row| row.node)
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, tree: &[FileNode]) {
        let count = self.visible_rows(tree).len();
        if self.cursor + 1 < count {
            self.cursor += 1;
        }
    }

    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_last(&mut self, tree: &[FileNode]) {
        self.cursor = self.visible_rows(tree).len().saturating_sub(1);
    }

    /// Keep the cursor inside the visible rows after a collapse.
    pub fn clamp_cursor(&mut self, tree: &[FileNode]) {
        let count = self.visible_rows(tree).len();
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }

    fn sync_cursor_to_selection(&mut self, tree: &[FileNode]) {
        if let Some(id) = self.selected_file.as_deref() {
            if let Some(pos) = self.visible_rows(tree).iter().position(|r| r.node.id == id) {
                self.cursor = pos;
            }
        }
    }
}
