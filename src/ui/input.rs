use crate::controller::ControlId;
use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('i') | KeyCode::Up => {
            app.activate(ControlId::Increment);
        }
        KeyCode::Char('-') | KeyCode::Char('d') | KeyCode::Down => {
            app.activate(ControlId::Decrement);
        }
        KeyCode::Char('r') | KeyCode::Char('0') => {
            app.activate(ControlId::Reset);
        }
        KeyCode::Left | KeyCode::BackTab => app.move_focus(-1),
        KeyCode::Right | KeyCode::Tab => app.move_focus(1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_focused();
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.on_click(mouse.column, mouse.row);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
