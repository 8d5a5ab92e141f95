//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are produced by activation controls (buttons, keys, HTTP
/// requests) and consumed by reducers.
pub trait Intent: Send + 'static {}
