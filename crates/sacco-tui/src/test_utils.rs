//! Helpers for widget and view tests

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Terminal;

use sacco_app::AppState;

/// A TestBackend terminal with buffer search helpers
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
    area: Rect,
}

impl TestTerminal {
    /// 100x32, large enough for the dashboard
    pub fn new() -> Self {
        Self::with_size(100, 32)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        Self {
            terminal,
            area: Rect::new(0, 0, width, height),
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|f| f.render_widget(widget, area))
            .unwrap();
    }

    /// Render the full view for `state`
    pub fn draw_state(&mut self, state: &mut AppState) {
        self.terminal
            .draw(|f| crate::render::view(f, state))
            .unwrap();
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Buffer text, one line per row
    pub fn content(&self) -> String {
        buffer_text(self.buffer())
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }
}

/// Flatten a buffer into newline-separated rows
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

/// A logged-in state with the fixture dashboard applied
pub fn logged_in_state() -> AppState {
    use sacco_app::{FormId, Message};
    use sacco_store::fixtures::{builtin_active_loans, builtin_applications};
    use sacco_store::DashboardSnapshot;

    let mut state = AppState::new();
    state.login_form.set_value("username", "user");
    state.login_form.set_value("password", "password");
    sacco_app::update(&mut state, Message::FormSubmit(FormId::Login));
    let epoch = state.session_epoch;
    sacco_app::update(
        &mut state,
        Message::DashboardLoaded {
            epoch,
            snapshot: Box::new(DashboardSnapshot {
                loans: builtin_active_loans(),
                applications: builtin_applications(),
                trend: Default::default(),
            }),
        },
    );
    state
}
