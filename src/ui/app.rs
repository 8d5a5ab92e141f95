use crate::controller::{ControlId, SharedController, SharedText};
use crate::ui::layout::{body_parts, body_rect, hit};
use ratatui::layout::Rect;

/// Terminal host state.
///
/// The counter itself lives in the shared controller; the app only tracks
/// which button has focus and the screen size needed to map mouse clicks.
pub struct App {
    should_quit: bool,
    focus: ControlId,
    size: Option<(u16, u16)>,
    controller: SharedController,
    view: SharedText,
    server_url: Option<String>,
}

impl App {
    pub fn new(controller: SharedController, view: SharedText) -> Self {
        Self {
            should_quit: false,
            focus: ControlId::Increment,
            size: None,
            controller,
            view,
            server_url: None,
        }
    }

    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Activate a control and return the new value.
    pub fn activate(&mut self, control: ControlId) -> i64 {
        self.controller.lock().dispatch(control.intent())
    }

    pub fn activate_focused(&mut self) -> i64 {
        self.activate(self.focus)
    }

    /// Move button focus by `delta`, wrapping around.
    pub fn move_focus(&mut self, delta: isize) {
        let len = ControlId::ALL.len() as isize;
        let current = ControlId::ALL
            .iter()
            .position(|c| *c == self.focus)
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.focus = ControlId::ALL[next];
    }

    pub fn focus(&self) -> ControlId {
        self.focus
    }

    /// Text currently on the display surface.
    pub fn display_text(&self) -> String {
        self.view.text()
    }

    pub fn value(&self) -> i64 {
        self.controller.lock().value()
    }

    pub fn server_url(&self) -> Option<&str> {
        self.server_url.as_deref()
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Handle a click at screen cell (`col`, `row`).
    ///
    /// Activates and focuses the button under the cursor, if any.
    pub fn on_click(&mut self, col: u16, row: u16) -> Option<ControlId> {
        let (cols, rows) = self.size?;
        let (_, buttons) = body_parts(body_rect(Rect::new(0, 0, cols, rows)));
        let index = buttons.iter().position(|b| hit(*b, col, row))?;
        let control = ControlId::ALL[index];
        self.focus = control;
        self.activate(control);
        Some(control)
    }
}
