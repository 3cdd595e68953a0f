//! Header bar widget
//!
//! Logo, product name, current page title, and the theme indicator.

use cron_app::config::Theme;
use cron_app::Route;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct MainHeader<'a> {
    route: &'a Route,
    theme: Theme,
    /// Shown next to the page title on the analysis page
    project_name: Option<&'a str>,
}

impl<'a> MainHeader<'a> {
    pub fn new(route: &'a Route, theme: Theme) -> Self {
        Self {
            route,
            theme,
            project_name: None,
        }
    }

    pub fn project_name(mut self, name: Option<&'a str>) -> Self {
        self.project_name = name;
        self
    }

    fn title_line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled(
                " ⚡ ",
                Style::default()
                    .fg(palette::CONTRAST_FG)
                    .bg(palette::accent(self.theme)),
            ),
            Span::raw(" "),
            Span::styled("CRON", styles::text_bright()),
            Span::styled("  AI Code Assistant", styles::text_muted()),
            Span::styled("  │  ", styles::text_muted()),
            Span::styled(self.route.title(), styles::accent_bold(self.theme)),
        ];
        if let Some(name) = self.project_name {
            spans.push(Span::styled(" · ", styles::text_muted()));
            spans.push(Span::styled(name, styles::text_primary()));
        }
        Line::from(spans)
    }

    fn actions_line(&self) -> Line<'static> {
        let icon = match self.theme {
            Theme::SolarFlare => "☀",
            Theme::DarkMatter => "☾",
        };
        Line::from(vec![
            Span::styled("Ready to analyze", styles::text_secondary()),
            Span::styled("  │  ", styles::text_muted()),
            Span::styled(format!("{} ", icon), styles::accent(self.theme)),
            Span::styled(self.theme.display_name(), styles::text_muted()),
            Span::raw(" "),
        ])
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = self.title_line();
        let actions = self.actions_line();

        // Drop the right-hand block on narrow terminals rather than overlap
        let fits = title.width() + actions.width() + 2 <= inner.width as usize;
        Paragraph::new(title).render(inner, buf);
        if fits {
            Paragraph::new(actions)
                .alignment(Alignment::Right)
                .render(inner, buf);
        }
    }
}
