use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::shutdown::ShutdownManager;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    /// Start the reader thread. It stops when `shutdown` is signaled or
    /// the receiving side is dropped; either way `next` then reports
    /// `Disconnected`.
    pub fn new(tick_rate: Duration, shutdown: ShutdownManager) -> Self {
        let (event_tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    break;
                }

                // Short poll timeout so the shutdown flag is checked often
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                let sent = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                        Ok(Event::Mouse(mouse)) => event_tx.send(AppEvent::Mouse(mouse)),
                        Ok(Event::Resize(cols, rows)) => {
                            event_tx.send(AppEvent::Resize(cols, rows))
                        }
                        Ok(_) => Ok(()),
                        Err(err) => {
                            tracing::error!("Terminal read error: {}", err);
                            break;
                        }
                    },
                    Ok(false) => Ok(()),
                    Err(err) => {
                        tracing::error!("Terminal poll error: {}", err);
                        break;
                    }
                };
                if sent.is_err() {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
