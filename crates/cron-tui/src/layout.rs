//! Screen layout definitions for the TUI
//!
//! The frame is header / page body / status bar. The analysis page further
//! splits its body into up to three panes depending on which side panels are
//! open.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// File tree pane width when open
pub const TREE_WIDTH: u16 = 30;

/// Suggestions pane width when open
pub const SUGGESTIONS_WIDTH: u16 = 46;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Page content for the current route
    pub body: Rect,
    /// Single-row key hints
    pub status: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Pane areas of the analysis page. Closed panels get no area.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisAreas {
    pub tree: Option<Rect>,
    pub editor: Rect,
    pub suggestions: Option<Rect>,
}

pub fn analysis_panes(body: Rect, tree_open: bool, suggestions_open: bool) -> AnalysisAreas {
    let mut constraints = Vec::with_capacity(3);
    if tree_open {
        constraints.push(Constraint::Length(TREE_WIDTH));
    }
    constraints.push(Constraint::Min(20));
    if suggestions_open {
        constraints.push(Constraint::Length(SUGGESTIONS_WIDTH));
    }

    let chunks = Layout::horizontal(constraints).split(body);
    let mut iter = chunks.iter().copied();

    let tree = if tree_open { iter.next() } else { None };
    let editor = iter.next().unwrap_or(body);
    let suggestions = if suggestions_open { iter.next() } else { None };

    AnalysisAreas {
        tree,
        editor,
        suggestions,
    }
}
