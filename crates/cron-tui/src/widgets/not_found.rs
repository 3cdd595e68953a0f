//! 404 page for unknown routes

use cron_app::config::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{modal_overlay::centered_rect, truncate_with_ellipsis};
use crate::theme::{palette, styles};

pub struct NotFound<'a> {
    path: &'a str,
    theme: Theme,
}

impl<'a> NotFound<'a> {
    pub fn new(path: &'a str, theme: Theme) -> Self {
        Self { path, theme }
    }
}

impl Widget for NotFound<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content = centered_rect(area.width.min(64), 10, area);

        let lines = vec![
            Line::from(Span::styled(
                " ⚠ ",
                Style::default()
                    .fg(palette::CONTRAST_FG)
                    .bg(palette::accent(self.theme)),
            )),
            Line::default(),
            Line::from(Span::styled("404", styles::accent_bold(self.theme))),
            Line::from(Span::styled("Page Not Found", styles::text_bright())),
            Line::from(Span::styled(
                "The page you're looking for doesn't exist or has been moved.",
                styles::text_secondary(),
            )),
            Line::from(Span::styled(
                truncate_with_ellipsis(self.path, content.width as usize),
                styles::text_muted(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("[Enter]", styles::keybinding(self.theme)),
                Span::styled(" Return to Dashboard   ", styles::text_primary()),
                Span::styled("[h]", styles::keybinding(self.theme)),
                Span::styled(" Get Help", styles::text_primary()),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(content, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_not_found_shows_path_and_actions() {
        let mut term = TestTerminal::with_size(80, 20);
        term.render_widget(NotFound::new("/reports", Theme::SolarFlare), term.area());

        assert!(term.buffer_contains("404"));
        assert!(term.buffer_contains("Page Not Found"));
        assert!(term.buffer_contains("/reports"));
        assert!(term.buffer_contains("[Enter] Return to Dashboard"));
        assert!(term.buffer_contains("[h] Get Help"));
    }
}
