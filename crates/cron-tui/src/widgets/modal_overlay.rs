//! Modal overlay helpers shared by the dialogs.
//!
//! A modal is drawn in three passes over whatever the page rendered: the page
//! is dimmed, a one-cell shadow is cast to the right and below, and the modal
//! rect itself is cleared.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a `width` x `height` rect inside `area`, shrinking it if needed.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Repaint every cell in `area` with muted text on the deepest background.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].set_style(dim);
        }
    }
}

/// Shadow along the right and bottom edges of `modal`, offset by one cell.
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right = modal.right();
    let bottom = modal.bottom();

    let edge = (modal.y + 1..=bottom)
        .map(|y| (right, y))
        .chain((modal.x + 1..right).map(|x| (x, bottom)));
    for pos in edge {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(' ').set_style(shadow);
        }
    }
}

/// Dim `area`, cast a shadow and clear a centered modal rect. Returns the
/// cleared rect for the dialog to draw into.
pub fn open_modal(buf: &mut Buffer, area: Rect, width: u16, height: u16) -> Rect {
    let modal = centered_rect(width, height, area);
    dim_background(buf, area);
    render_shadow(buf, modal);
    Clear.render(modal, buf);
    modal
}
