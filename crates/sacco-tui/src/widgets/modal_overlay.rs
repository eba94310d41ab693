//! Shared modal plumbing: centering, dimming the shell behind, a drop shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::{palette, styles};

/// Center a fixed-size rect within `area`, clamped to it.
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

/// Mute every cell of `area`.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim);
            }
        }
    }
}

/// One-cell shadow along the right and bottom edges of `rect`.
pub fn render_shadow(buf: &mut Buffer, rect: Rect) {
    let shadow = Style::default().bg(palette::SHADOW);
    let right = rect.right();
    let bottom = rect.bottom();

    for y in rect.y.saturating_add(1)..=bottom {
        if let Some(cell) = buf.cell_mut((right, y)) {
            cell.set_char(' ').set_style(shadow);
        }
    }
    for x in rect.x.saturating_add(1)..=right {
        if let Some(cell) = buf.cell_mut((x, bottom)) {
            cell.set_char(' ').set_style(shadow);
        }
    }
}

/// Dim `area`, draw a titled modal frame of the given size and return its
/// inner area.
pub fn open_modal(buf: &mut Buffer, area: Rect, width: u16, height: u16, title: &str) -> Rect {
    dim_background(buf, area);

    // Leave room for the shadow
    let modal = centered_rect(
        width,
        height,
        Rect::new(
            area.x,
            area.y,
            area.width.saturating_sub(1),
            area.height.saturating_sub(1),
        ),
    );
    Clear.render(modal, buf);
    render_shadow(buf, modal);

    let block = styles::modal_block(title);
    let inner = block.inner(modal);
    block.render(modal, buf);
    inner
}
