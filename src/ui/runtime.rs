use crate::shutdown::ShutdownManager;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the terminal host until the user quits or shutdown is signaled.
///
/// Quitting signals `shutdown` so an HTTP host sharing the process stops too.
pub fn run(mut app: App, tick_rate: Duration, shutdown: ShutdownManager) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.clone());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            // Redraw picks up activations made over HTTP
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}
