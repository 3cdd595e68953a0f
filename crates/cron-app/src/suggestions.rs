//! Suggestion list manager and panel state.
//!
//! The list is the single source of truth: filtering borrows from it, removal
//! deletes from it. Every operation is total; an unknown id is a no-op.

use cron_core::{CategoryFilter, Suggestion};
use serde::Serialize;

/// Returns the suggestions matching `filter`, in list order.
pub fn filter_by_category(list: &[Suggestion], filter: CategoryFilter) -> Vec<&Suggestion> {
    list.iter().filter(|s| filter.matches(s.category)).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionPanelState {
    items: Vec<Suggestion>,
    pub filter: CategoryFilter,
    /// Index into the filtered view
    pub cursor: usize,
}

impl SuggestionPanelState {
    pub fn new(items: Vec<Suggestion>) -> Self {
        Self {
            items,
            filter: CategoryFilter::All,
            cursor: 0,
        }
    }

    /// Every suggestion still in the list, regardless of filter.
    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn visible(&self) -> Vec<&Suggestion> {
        filter_by_category(&self.items, self.filter)
    }

    pub fn get(&self, id: &str) -> Option<&Suggestion> {
        self.items.iter().find(|s| s.id == id)
    }

    /// Suggestion under the cursor in the filtered view.
    pub fn cursor_item(&self) -> Option<&Suggestion> {
        self.visible().get(self.cursor).copied()
    }

    /// Remove the suggestion with `id`, returning it. Absent ids change nothing.
    pub fn remove(&mut self, id: &str) -> Option<Suggestion> {
        let pos = self.items.iter().position(|s| s.id == id)?;
        let removed = self.items.remove(pos);
        self.clamp_cursor();
        Some(removed)
    }

    /// Apply and dismiss both drop the entry; only the caller's reporting differs.
    pub fn apply(&mut self, id: &str) -> Option<Suggestion> {
        self.remove(id)
    }

    pub fn dismiss(&mut self, id: &str) -> Option<Suggestion> {
        self.remove(id)
    }

    /// Flip the expansion flag of one entry.
    pub fn toggle_expanded(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|s| s.id == id) {
            item.expanded = !item.expanded;
        }
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.cursor = 0;
    }

    pub fn next_tab(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn prev_tab(&mut self) {
        self.set_filter(self.filter.prev());
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.visible().len() {
            self.cursor += 1;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Source lines referenced by the remaining suggestions.
    pub fn referenced_lines(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self.items.iter().map(|s| s.line_number).collect();
        lines.sort_unstable();
        lines.dedup();
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cron_core::mock::seed_suggestions;
    use cron_core::SuggestionCategory;

    fn ids(list: &[&Suggestion]) -> Vec<String> {
        list.iter().map(|s| s.id.clone()).collect()
    }

    fn panel() -> SuggestionPanelState {
        SuggestionPanelState::new(seed_suggestions())
    }

    #[test]
    fn test_filter_all_is_identity() {
        let list = seed_suggestions();
        let filtered = filter_by_category(&list, CategoryFilter::All);
        assert_eq!(ids(&filtered), ["1", "2", "3"]);
    }

    #[test]
    fn test_filter_returns_only_matching_in_order() {
        let mut list = seed_suggestions();
        let mut extra = list[0].clone();
        extra.id = "4".into();
        list.push(extra);

        for category in SuggestionCategory::ALL {
            let filtered = filter_by_category(&list, CategoryFilter::Only(category));
            assert!(filtered.iter().all(|s| s.category == category));
        }

        let perf = filter_by_category(
            &list,
            CategoryFilter::Only(SuggestionCategory::Performance),
        );
        assert_eq!(ids(&perf), ["1", "4"]);
        let security = filter_by_category(&list, CategoryFilter::Only(SuggestionCategory::Security));
        assert!(security.is_empty());
    }

    #[test]
    fn test_apply_then_dismiss_scenario() {
        let mut panel = panel();

        assert!(panel.apply("1").is_some());
        assert_eq!(ids(&panel.visible()), ["2", "3"]);

        assert!(panel.dismiss("2").is_some());
        assert_eq!(ids(&panel.visible()), ["3"]);
        assert_eq!(panel.total(), 1);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut panel = panel();
        let before = panel.clone();
        assert!(panel.apply("99").is_none());
        assert!(panel.dismiss("99").is_none());
        assert_eq!(panel, before);

        panel.apply("1");
        let after_first = panel.clone();
        panel.apply("1");
        assert_eq!(panel, after_first);
    }

    #[test]
    fn test_remove_n_of_m() {
        let mut panel = panel();
        let removed = ["3", "1"];
        for id in removed {
            panel.dismiss(id);
        }
        assert_eq!(panel.total(), 3 - removed.len());
        assert!(panel.items().iter().all(|s| !removed.contains(&s.id.as_str())));
    }

    #[test]
    fn test_toggle_expansion_is_involution() {
        let mut panel = panel();
        panel.toggle_expanded("2");
        assert!(panel.get("2").unwrap().expanded);
        assert!(!panel.get("1").unwrap().expanded);
        panel.toggle_expanded("2");
        assert!(!panel.get("2").unwrap().expanded);
    }

    #[test]
    fn test_toggle_expansion_absent_is_noop() {
        let mut panel = panel();
        let before = panel.clone();
        panel.toggle_expanded("nope");
        assert_eq!(panel, before);
    }

    #[test]
    fn test_expansion_does_not_affect_removal() {
        let mut panel = panel();
        panel.toggle_expanded("1");
        assert!(panel.apply("1").unwrap().expanded);
        assert_eq!(panel.total(), 2);
    }

    #[test]
    fn test_cursor_clamped_after_removal() {
        let mut panel = panel();
        panel.cursor_down();
        panel.cursor_down();
        assert_eq!(panel.cursor, 2);
        panel.dismiss("3");
        assert_eq!(panel.cursor, 1);
        assert_eq!(panel.cursor_item().unwrap().id, "2");
    }

    #[test]
    fn test_tab_change_resets_cursor() {
        let mut panel = panel();
        panel.cursor_down();
        panel.next_tab();
        assert_eq!(
            panel.filter,
            CategoryFilter::Only(SuggestionCategory::Performance)
        );
        assert_eq!(panel.cursor, 0);
        assert_eq!(ids(&panel.visible()), ["1"]);
    }

    #[test]
    fn test_referenced_lines_sorted() {
        let mut panel = panel();
        assert_eq!(panel.referenced_lines(), [5, 11, 24]);
        panel.apply("1");
        assert_eq!(panel.referenced_lines(), [5, 24]);
    }
}
