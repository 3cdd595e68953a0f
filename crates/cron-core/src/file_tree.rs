//! # Project Tree Domain Types
//!
//! Static file/folder records shown in the analysis view's file panel.
//!
//! A [`FileNode`] never tracks whether it is expanded. Expansion belongs to the
//! selection state in `cron-app`, keyed by node id, so the same tree can be
//! rendered by several views without sharing UI state.

use serde::Serialize;

// ── NodeKind ──────────────────────────────────────────────────────────────────

/// Whether a node is a leaf file or a folder that may hold children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

// ── Issue annotations ─────────────────────────────────────────────────────────

/// Category of the issue badge attached to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
    Suggestion,
}

impl IssueKind {
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::Error => "error",
            IssueKind::Warning => "warning",
            IssueKind::Suggestion => "suggestion",
        }
    }
}

/// Issue badge: how many issues a file has and what kind they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IssueAnnotation {
    pub count: u32,
    pub kind: IssueKind,
}

impl IssueAnnotation {
    /// Header text for the code editor ("3 issues detected").
    pub fn summary(&self) -> String {
        match self.count {
            1 => "1 issue detected".to_string(),
            n => format!("{n} issues detected"),
        }
    }
}

// ── FileNode ──────────────────────────────────────────────────────────────────

/// A file or folder in a mock project tree.
///
/// Children are private so a file can only be built through
/// [`FileNode::file`], which never attaches any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<FileNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<IssueAnnotation>,
}

impl FileNode {
    pub fn file(id: impl Into<String>, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::File,
            path: path.into(),
            children: Vec::new(),
            issues: None,
        }
    }

    pub fn folder(
        id: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<FileNode>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::Folder,
            path: path.into(),
            children,
            issues: None,
        }
    }

    /// Attach an issue badge (builder style).
    pub fn with_issues(mut self, count: u32, kind: IssueKind) -> Self {
        self.issues = Some(IssueAnnotation { count, kind });
        self
    }

    /// Ordered children. Always empty for files.
    pub fn children(&self) -> &[FileNode] {
        &self.children
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// TypeScript sources get the code icon in the tree.
    pub fn is_source(&self) -> bool {
        self.kind == NodeKind::File && (self.name.ends_with(".tsx") || self.name.ends_with(".ts"))
    }

    /// Depth-first search for a node by id across a forest.
    pub fn find<'a>(roots: &'a [FileNode], id: &str) -> Option<&'a FileNode> {
        for node in roots {
            if node.id == id {
                return Some(node);
            }
            if let Some(found) = Self::find(&node.children, id) {
                return Some(found);
            }
        }
        None
    }
}
