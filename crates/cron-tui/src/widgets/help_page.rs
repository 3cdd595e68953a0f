//! Help & Support page

use cron_app::config::Theme;
use cron_core::mock::faqs;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::wrap_words;
use crate::theme::styles;

const RESOURCES: [(&str, &str); 3] = [
    ("Documentation", "Complete user guide and API reference"),
    ("Video Tutorials", "Step-by-step video guides"),
    ("Community", "Join our developer community"),
];

const GETTING_STARTED: [(&str, &str); 2] = [
    (
        "1. Connect Your IDE",
        "Install the CRON extension for VS Code or IntelliJ IDEA to enable real-time analysis.",
    ),
    (
        "2. Run Your First Analysis",
        "Open a project and press [r] on the analysis page to see optimization suggestions.",
    ),
];

const SUPPORT: [(&str, &str); 2] = [
    ("Live Chat", "Get instant help"),
    ("Knowledge Base", "Search our docs"),
];

pub struct HelpPage {
    theme: Theme,
}

impl HelpPage {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn card(&self, title: &str, lines: Vec<Line<'static>>, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false, self.theme)
            .title(Span::styled(format!(" {} ", title), styles::text_bright()));
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(lines).render(inner, buf);
    }

    fn heading_with_text(&self, heading: &str, text: &str, width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            format!(" {}", heading),
            styles::accent_bold(self.theme),
        ))];
        lines.extend(
            wrap_words(text, width.saturating_sub(2))
                .into_iter()
                .map(|l| Line::from(Span::styled(format!(" {}", l), styles::text_secondary()))),
        );
        lines
    }
}

impl Widget for HelpPage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(5)]).areas(area);
        Paragraph::new(vec![
            Line::from(Span::styled(" Help & Support", styles::text_bright())),
            Line::from(Span::styled(
                " Get the most out of CRON with our comprehensive guides and support",
                styles::text_secondary(),
            )),
        ])
        .render(title, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(body);
        let [resources, started, support] = Layout::vertical([
            Constraint::Length(RESOURCES.len() as u16 + 2),
            Constraint::Min(6),
            Constraint::Length(SUPPORT.len() as u16 + 3),
        ])
        .areas(left);

        let resource_lines = RESOURCES
            .iter()
            .map(|(name, description)| {
                Line::from(vec![
                    Span::styled(format!(" ▸ {:<16}", name), styles::accent(self.theme)),
                    Span::styled(*description, styles::text_secondary()),
                ])
            })
            .collect();
        self.card("Quick Resources", resource_lines, resources, buf);

        let width = started.width.saturating_sub(2) as usize;
        let mut started_lines = vec![Line::from(Span::styled(
            " New to CRON? Start here to set up your first analysis",
            styles::text_muted(),
        ))];
        for (heading, text) in GETTING_STARTED {
            started_lines.push(Line::default());
            started_lines.extend(self.heading_with_text(heading, text, width));
        }
        self.card("Getting Started", started_lines, started, buf);

        let mut support_lines = vec![Line::from(Span::styled(
            " Our support team is here to help you succeed",
            styles::text_muted(),
        ))];
        support_lines.extend(SUPPORT.iter().map(|(name, description)| {
            Line::from(vec![
                Span::styled(format!(" ▸ {:<16}", name), styles::accent(self.theme)),
                Span::styled(*description, styles::text_secondary()),
            ])
        }));
        self.card("Need More Help?", support_lines, support, buf);

        let width = right.width.saturating_sub(2) as usize;
        let mut faq_lines = Vec::new();
        for faq in faqs() {
            faq_lines.extend(self.heading_with_text(faq.question, faq.answer, width));
            faq_lines.push(Line::default());
        }
        self.card("Frequently Asked Questions", faq_lines, right, buf);
    }
}
