//! Dashboard page: welcome banner, stat cards, project list and activity feed

use cron_app::config::Theme;
use cron_app::dashboard::DashboardState;
use cron_core::{Activity, ActivityKind, Project};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{truncate_with_ellipsis, wrap_words};
use crate::theme::{palette, styles};

pub struct Dashboard<'a> {
    state: &'a DashboardState,
    theme: Theme,
}

impl<'a> Dashboard<'a> {
    pub fn new(state: &'a DashboardState, theme: Theme) -> Self {
        Self { state, theme }
    }

    fn render_welcome(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled("Welcome to CRON", styles::text_bright())),
            Line::from(Span::styled(
                "AI-powered code analysis and optimization at your fingertips",
                styles::text_secondary(),
            )),
        ];
        Paragraph::new(lines).render(area, buf);
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer) {
        let stats = self.state.stats();
        let cards = [
            ("Active Projects", stats.active_projects.to_string(), styles::accent(self.theme)),
            ("Issues Detected", stats.issues_found.to_string(), styles::status_yellow()),
            ("Issues Resolved", stats.issues_fixed.to_string(), styles::status_green()),
            ("Success Rate", format!("{}%", stats.success_rate), styles::status_blue()),
        ];

        let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        for ((label, value, style), card) in cards.into_iter().zip(areas.iter()) {
            let block = styles::glass_block(false, self.theme);
            let inner = block.inner(*card);
            block.render(*card, buf);
            Paragraph::new(vec![
                Line::from(Span::styled(label, styles::text_muted())),
                Line::from(Span::styled(value, style.add_modifier(Modifier::BOLD))),
            ])
            .render(inner, buf);
        }
    }

    fn project_lines(&self, project: &Project, is_cursor: bool, width: usize) -> Vec<Line<'static>> {
        let (icon, status_style) = styles::project_status_indicator(project.status);
        let marker = if is_cursor {
            Span::styled("▌", styles::accent(self.theme))
        } else {
            Span::raw(" ")
        };
        let name_style = if is_cursor {
            styles::accent_bold(self.theme)
        } else {
            styles::text_bright()
        };

        let mut meta = vec![
            Span::raw("   "),
            Span::styled(project.last_analyzed.clone(), styles::text_muted()),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(project.language.clone(), styles::text_muted()),
        ];
        if let Some(summary) = project.fix_summary() {
            meta.push(Span::styled(" · ", styles::text_muted()));
            meta.push(Span::styled(summary, styles::status_green()));
        }

        let lines = vec![
            Line::from(vec![
                marker.clone(),
                Span::styled(format!(" {} ", icon), status_style),
                Span::styled(project.name.clone(), name_style),
                Span::styled(format!("  {}", project.status.label()), status_style),
            ]),
            Line::from(vec![
                marker.clone(),
                Span::raw("   "),
                Span::styled(
                    truncate_with_ellipsis(&project.path, width.saturating_sub(4)),
                    styles::text_secondary(),
                ),
            ]),
            Line::from([vec![marker], meta].concat()),
        ];

        if is_cursor {
            lines
                .into_iter()
                .map(|l| l.style(Style::default().bg(palette::POPUP_BG)))
                .collect()
        } else {
            lines
        }
    }

    fn render_projects(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true, self.theme)
            .title(Span::styled(" Recent Projects ", styles::text_bright()))
            .title(
                Line::from(vec![
                    Span::styled("[n]", styles::keybinding(self.theme)),
                    Span::styled(" New Project ", styles::text_secondary()),
                ])
                .right_aligned(),
            );
        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.projects.is_empty() {
            Paragraph::new(Span::styled("No projects yet", styles::text_muted()))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        // four rows per project including the spacer
        let per_page = (inner.height as usize / 4).max(1);
        let offset = (self.state.cursor + 1).saturating_sub(per_page);

        let mut lines = Vec::new();
        for (i, project) in self.state.projects.iter().enumerate().skip(offset) {
            lines.extend(self.project_lines(project, i == self.state.cursor, inner.width as usize));
            lines.push(Line::default());
        }
        Paragraph::new(lines).render(inner, buf);
    }

    fn activity_lines(activity: &Activity, width: usize) -> Vec<Line<'static>> {
        let (icon, icon_style) = match activity.kind {
            ActivityKind::Analysis => ("▤", styles::status_blue()),
            ActivityKind::Fix => ("✔", styles::status_green()),
            ActivityKind::Optimization => ("⚡", styles::status_yellow()),
        };

        let mut lines: Vec<Line> = wrap_words(&activity.description, width.saturating_sub(3))
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let lead = if i == 0 {
                    Span::styled(format!(" {} ", icon), icon_style)
                } else {
                    Span::raw("   ")
                };
                Line::from(vec![lead, Span::styled(text, styles::text_primary())])
            })
            .collect();

        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(activity.impact.label(), styles::impact_style(activity.impact)),
            Span::styled(
                format!(" · {} · {}", activity.project, activity.timestamp),
                styles::text_muted(),
            ),
        ]));
        lines
    }

    fn render_activity(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false, self.theme)
            .title(Span::styled(" Recent Activity ", styles::text_bright()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for activity in &self.state.activity {
            lines.extend(Self::activity_lines(activity, inner.width as usize));
            lines.push(Line::default());
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [welcome, stats, main] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(6),
        ])
        .areas(area);

        let [projects, activity] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(main);

        self.render_welcome(welcome.inner(Margin::new(1, 0)), buf);
        self.render_stats(stats, buf);
        self.render_projects(projects, buf);
        self.render_activity(activity, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(state: &DashboardState) -> TestTerminal {
        let mut term = TestTerminal::with_size(120, 32);
        term.render_widget(Dashboard::new(state, Theme::SolarFlare), term.area());
        term
    }

    #[test]
    fn test_welcome_and_stats() {
        let state = DashboardState::seeded();
        let term = render(&state);

        assert!(term.buffer_contains("Welcome to CRON"));
        assert!(term.buffer_contains("Active Projects"));
        // 17 found, 13 fixed, 76%
        assert!(term.buffer_contains("17"));
        assert!(term.buffer_contains("13"));
        assert!(term.buffer_contains("76%"));
    }

    #[test]
    fn test_project_list() {
        let state = DashboardState::seeded();
        let term = render(&state);

        assert!(term.buffer_contains("E-commerce Frontend"));
        assert!(term.buffer_contains("/Users/dev/projects/api-gateway"));
        assert!(term.buffer_contains("8/12 fixed"));
        assert!(term.buffer_contains("analyzing"));
        assert!(term.buffer_contains("[n] New Project"));
    }

    #[test]
    fn test_cursor_marks_project() {
        let mut state = DashboardState::seeded();
        state.cursor_down();
        let term = render(&state);

        let content = term.content();
        let row = content.lines().find(|l| l.contains("API Gateway")).unwrap();
        assert!(row.contains('▌'));
        let row = content.lines().find(|l| l.contains("E-commerce Frontend")).unwrap();
        assert!(!row.contains('▌'));
    }

    #[test]
    fn test_activity_feed() {
        let state = DashboardState::seeded();
        let term = render(&state);

        assert!(term.buffer_contains("Recent Activity"));
        assert!(term.buffer_contains("Fixed memory leak"));
        assert!(term.buffer_contains("30 minutes ago"));
    }
}
