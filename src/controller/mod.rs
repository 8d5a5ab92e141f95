//! The counter controller and its binding to a host.

mod controls;
mod error;
mod host;
mod surface;

pub use controls::{ControlId, ControlMap};
pub use error::BindError;
pub use host::{ElementHost, Host};
pub use surface::{DisplaySurface, SharedText};

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::ElementIds;
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Reducer;

/// Controller shared by several hosts in one process.
pub type SharedController = Arc<Mutex<CounterController<SharedText>>>;

/// Owns the counter value and keeps a display surface in sync with it.
///
/// Every operation updates the value and then writes its decimal text to
/// the surface before returning, so the two never diverge.
pub struct CounterController<S: DisplaySurface> {
    state: CounterState,
    surface: S,
}

impl<S: DisplaySurface> CounterController<S> {
    /// Create a controller at 0 and show it on `surface`.
    pub fn new(mut surface: S) -> Self {
        let state = CounterState::default();
        surface.set_text(&state.display_text());
        Self { state, surface }
    }

    pub fn increment(&mut self) -> i64 {
        self.dispatch(CounterIntent::Increment)
    }

    pub fn decrement(&mut self) -> i64 {
        self.dispatch(CounterIntent::Decrement)
    }

    pub fn reset(&mut self) -> i64 {
        self.dispatch(CounterIntent::Reset)
    }

    /// Apply one intent, refresh the display and return the new value.
    pub fn dispatch(&mut self, intent: CounterIntent) -> i64 {
        self.state = CounterReducer::reduce(self.state, intent);
        self.surface.set_text(&self.state.display_text());
        tracing::debug!(?intent, value = self.state.value, "counter updated");
        self.state.value
    }

    pub fn value(&self) -> i64 {
        self.state.value
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// Resolve the display and every control on `host`.
///
/// Fails on the first missing element. On success the controller already
/// shows "0" and the map holds exactly one handler per control.
pub fn bind<H: Host>(
    host: &H,
    ids: &ElementIds,
) -> Result<(CounterController<H::Surface>, ControlMap), BindError> {
    let surface = host
        .surface(&ids.display)
        .ok_or_else(|| BindError::MissingDisplay {
            id: ids.display.clone(),
        })?;

    let mut controls = ControlMap::new();
    for (control, id) in ids.controls() {
        if !host.has_control(id) {
            return Err(BindError::MissingControl { id: id.to_string() });
        }
        controls.register(id, control)?;
    }

    tracing::info!(display = %ids.display, controls = controls.len(), "counter bound to host");
    Ok((CounterController::new(surface), controls))
}

/// Bind to an [`ElementHost`] and wrap the controller for sharing.
pub fn bind_shared(
    ids: &ElementIds,
) -> Result<(SharedController, ControlMap, SharedText), BindError> {
    let view = SharedText::new();
    let host = ElementHost::from_ids(ids, view.clone());
    let (controller, controls) = bind(&host, ids)?;
    Ok((Arc::new(Mutex::new(controller)), controls, view))
}
