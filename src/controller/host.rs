//! Host environments the controller binds to.

use std::collections::HashSet;

use crate::config::ElementIds;
use crate::controller::surface::{DisplaySurface, SharedText};

/// An environment that owns the display surface and the activation controls.
pub trait Host {
    type Surface: DisplaySurface;

    /// Resolve the display surface with the given id.
    fn surface(&self, id: &str) -> Option<Self::Surface>;

    /// Whether a control with the given id exists.
    fn has_control(&self, id: &str) -> bool;
}

/// Host backed by a [`SharedText`] and a fixed set of control ids.
///
/// Both the terminal UI and the HTTP page build one of these from the
/// configured element ids and render from the same surface.
#[derive(Debug, Clone)]
pub struct ElementHost {
    display_id: String,
    surface: SharedText,
    controls: HashSet<String>,
}

impl ElementHost {
    pub fn new(display_id: impl Into<String>, surface: SharedText) -> Self {
        Self {
            display_id: display_id.into(),
            surface,
            controls: HashSet::new(),
        }
    }

    /// Host exposing every configured element.
    pub fn from_ids(ids: &ElementIds, surface: SharedText) -> Self {
        ids.controls()
            .into_iter()
            .fold(Self::new(ids.display.clone(), surface), |host, (_, id)| {
                host.with_control(id)
            })
    }

    pub fn with_control(mut self, id: impl Into<String>) -> Self {
        self.controls.insert(id.into());
        self
    }
}

impl Host for ElementHost {
    type Surface = SharedText;

    fn surface(&self, id: &str) -> Option<Self::Surface> {
        (id == self.display_id).then(|| self.surface.clone())
    }

    fn has_control(&self, id: &str) -> bool {
        self.controls.contains(id)
    }
}
