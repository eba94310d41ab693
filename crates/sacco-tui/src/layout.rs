//! Screen layout of the navigation shell

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the expanded sidebar
pub const SIDEBAR_WIDTH: u16 = 24;

/// Height of the header bar (border + one row + border)
pub const HEADER_HEIGHT: u16 = 3;

/// Screen areas of the shell
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Menu column; zero width when collapsed
    pub sidebar: Rect,
    /// Collapse toggle and route path
    pub header: Rect,
    /// The mounted destination
    pub content: Rect,
}

pub fn create(area: Rect, sidebar_collapsed: bool) -> ScreenAreas {
    let sidebar_width = if sidebar_collapsed { 0 } else { SIDEBAR_WIDTH };
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(area);
    let [header, content] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(main);

    ScreenAreas {
        sidebar,
        header,
        content,
    }
}
