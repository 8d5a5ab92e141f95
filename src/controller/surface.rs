//! Display surfaces the controller writes to.

use parking_lot::RwLock;
use std::sync::Arc;

/// A text-bearing element that shows the counter.
pub trait DisplaySurface: Send {
    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);
}

/// In-process text surface shared between the controller and a view.
///
/// The controller holds one clone and writes to it; views hold other clones
/// and only read.
#[derive(Debug, Clone, Default)]
pub struct SharedText {
    inner: Arc<RwLock<String>>,
}

impl SharedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current displayed text.
    pub fn text(&self) -> String {
        self.inner.read().clone()
    }
}

impl DisplaySurface for SharedText {
    fn set_text(&mut self, text: &str) {
        let mut guard = self.inner.write();
        guard.clear();
        guard.push_str(text);
    }
}
