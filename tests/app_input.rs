//! Key and mouse handling of the terminal host.

mod common;

use common::make_app;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tally::controller::ControlId;
use tally::ui::input::{handle_key, handle_mouse};
use tally::ui::layout::{body_parts, body_rect};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn plus_increments_and_updates_display() {
    let mut app = make_app();
    for _ in 0..3 {
        handle_key(&mut app, press(KeyCode::Char('+')));
    }
    assert_eq!(app.value(), 3);
    assert_eq!(app.display_text(), "3");
}

#[test]
fn down_arrow_decrements_below_zero() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Char('-')));
    assert_eq!(app.value(), -2);
    assert_eq!(app.display_text(), "-2");
}

#[test]
fn r_resets() {
    let mut app = make_app();
    for _ in 0..5 {
        handle_key(&mut app, press(KeyCode::Up));
    }
    handle_key(&mut app, press(KeyCode::Char('r')));
    assert_eq!(app.value(), 0);
    assert_eq!(app.display_text(), "0");
}

#[test]
fn key_release_is_ignored() {
    let mut app = make_app();
    let mut key = press(KeyCode::Char('+'));
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);
    assert_eq!(app.value(), 0);
}

#[test]
fn focus_wraps_and_enter_activates_focused() {
    let mut app = make_app();
    assert_eq!(app.focus(), ControlId::Increment);
    handle_key(&mut app, press(KeyCode::Left));
    assert_eq!(app.focus(), ControlId::Reset);
    handle_key(&mut app, press(KeyCode::Right));
    handle_key(&mut app, press(KeyCode::Right));
    assert_eq!(app.focus(), ControlId::Decrement);
    handle_key(&mut app, press(KeyCode::Enter));
    handle_key(&mut app, press(KeyCode::Char(' ')));
    assert_eq!(app.value(), -2);
}

#[test]
fn q_and_ctrl_c_quit() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(app.should_quit());

    let mut app = make_app();
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
    assert_eq!(app.value(), 0);
}

#[test]
fn clicking_buttons_activates_them() {
    let mut app = make_app();
    let (_, buttons) = body_parts(body_rect(Rect::new(0, 0, 80, 24)));
    let [incr, decr, reset] = buttons;

    handle_mouse(&mut app, click(incr.x + 1, incr.y + 1));
    handle_mouse(&mut app, click(incr.x + 1, incr.y + 1));
    assert_eq!(app.value(), 2);

    handle_mouse(&mut app, click(decr.x, decr.y));
    assert_eq!(app.value(), 1);
    assert_eq!(app.focus(), ControlId::Decrement);

    handle_mouse(&mut app, click(reset.x + reset.width - 1, reset.y));
    assert_eq!(app.value(), 0);
    assert_eq!(app.display_text(), "0");
}

#[test]
fn clicking_outside_buttons_does_nothing() {
    let mut app = make_app();
    assert_eq!(app.on_click(0, 0), None);
    handle_mouse(&mut app, click(79, 23));
    assert_eq!(app.value(), 0);
}

#[test]
fn activations_from_another_host_are_visible() {
    let (controller, _, view) = common::bound();
    let app = tally::ui::app::App::new(controller.clone(), view);
    controller.lock().increment();
    assert_eq!(app.value(), 1);
    assert_eq!(app.display_text(), "1");
}
