//! Confirmation dialog widget for the quit prompt

use cron_app::config::Theme;
use cron_app::confirm_dialog::ConfirmDialogState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::styles;

/// Keys bound to the options, in option order
const OPTION_KEYS: [&str; 2] = ["y", "n"];

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
    theme: Theme,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState, theme: Theme) -> Self {
        Self { state, theme }
    }

    fn buttons(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, ((label, _), key)) in self.state.options.iter().zip(OPTION_KEYS).enumerate() {
            if i > 0 {
                spans.push(Span::raw("    "));
            }
            let key_style = if i == 0 {
                styles::status_red()
            } else {
                styles::status_green()
            };
            spans.push(Span::styled(format!("[{}]", key), key_style.add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!(" {}", label), styles::text_primary()));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::open_modal(buf, area, 50, 8);
        let block = styles::modal_block(&self.state.title, self.theme);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [_, message, _, buttons] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .style(styles::status_yellow())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(message, buf);
        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(buttons, buf);
    }
}
