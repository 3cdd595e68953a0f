//! # Suggestion Domain Types
//!
//! A [`Suggestion`] describes a proposed code change. Suggestions are display
//! records only: applying one removes it from the panel, it never edits code.

use serde::Serialize;

// ── SuggestionCategory ────────────────────────────────────────────────────────

/// Closed set of suggestion categories, used for icons and filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionCategory {
    Performance,
    Refactoring,
    BestPractice,
    Security,
}

impl SuggestionCategory {
    pub const ALL: [SuggestionCategory; 4] = [
        SuggestionCategory::Performance,
        SuggestionCategory::Refactoring,
        SuggestionCategory::BestPractice,
        SuggestionCategory::Security,
    ];

    /// Lowercase label used in card metadata and empty-state text.
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionCategory::Performance => "performance",
            SuggestionCategory::Refactoring => "refactoring",
            SuggestionCategory::BestPractice => "best practice",
            SuggestionCategory::Security => "security",
        }
    }

    /// Title-case label used for tabs.
    pub fn title(&self) -> &'static str {
        match self {
            SuggestionCategory::Performance => "Performance",
            SuggestionCategory::Refactoring => "Refactor",
            SuggestionCategory::BestPractice => "Best Practice",
            SuggestionCategory::Security => "Security",
        }
    }
}

// ── Severity ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Moderate,
    Minor,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Moderate => "moderate",
            Severity::Minor => "minor",
        }
    }
}

// ── CategoryFilter ────────────────────────────────────────────────────────────

/// Active filter tab of the suggestions panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case", tag = "filter", content = "category")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(SuggestionCategory),
}

impl CategoryFilter {
    /// Tabs in display order.
    pub const TABS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(SuggestionCategory::Performance),
        CategoryFilter::Only(SuggestionCategory::Refactoring),
        CategoryFilter::Only(SuggestionCategory::BestPractice),
        CategoryFilter::Only(SuggestionCategory::Security),
    ];

    pub fn matches(&self, category: SuggestionCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.title(),
        }
    }

    fn position(&self) -> usize {
        Self::TABS.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Next tab, wrapping around.
    pub fn next(&self) -> Self {
        Self::TABS[(self.position() + 1) % Self::TABS.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(&self) -> Self {
        let len = Self::TABS.len();
        Self::TABS[(self.position() + len - 1) % len]
    }

    /// Message shown when no suggestion passes the filter.
    pub fn empty_message(&self) -> String {
        match self {
            CategoryFilter::All => {
                "Your code looks great! No optimization opportunities detected.".to_string()
            }
            CategoryFilter::Only(category) => {
                format!("No {} suggestions available.", category.label())
            }
        }
    }
}

// ── Suggestion ────────────────────────────────────────────────────────────────

/// A proposed code change attached to a source line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub category: SuggestionCategory,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    /// 1-based line in the sample source the suggestion refers to.
    pub line_number: usize,
    pub original_code: String,
    pub suggested_code: String,
    pub impact: String,
    pub reasoning: String,
    /// Card is showing the code comparison. Independent of removal.
    pub expanded: bool,
}
