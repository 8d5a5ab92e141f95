//! Activation controls and their handler registry.

use std::collections::HashMap;

use crate::controller::error::BindError;
use crate::ui::counter::CounterIntent;

/// The three controls a counter host exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Increment,
    Decrement,
    Reset,
}

impl ControlId {
    /// All controls, in on-screen order.
    pub const ALL: [ControlId; 3] = [ControlId::Increment, ControlId::Decrement, ControlId::Reset];

    /// Intent emitted when the control is activated.
    pub fn intent(self) -> CounterIntent {
        match self {
            ControlId::Increment => CounterIntent::Increment,
            ControlId::Decrement => CounterIntent::Decrement,
            ControlId::Reset => CounterIntent::Reset,
        }
    }

    /// Element id used when the configuration does not override it.
    pub fn default_element_id(self) -> &'static str {
        match self {
            ControlId::Increment => "incr",
            ControlId::Decrement => "decr",
            ControlId::Reset => "reset",
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            ControlId::Increment => "+",
            ControlId::Decrement => "-",
            ControlId::Reset => "Reset",
        }
    }
}

/// One handler per control element.
///
/// Maps element ids to the control they activate. A control can be
/// registered once for the lifetime of the map.
#[derive(Debug, Clone, Default)]
pub struct ControlMap {
    by_element: HashMap<String, ControlId>,
}

impl ControlMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for `control` under `element_id`.
    pub fn register(&mut self, element_id: &str, control: ControlId) -> Result<(), BindError> {
        let taken = self.by_element.contains_key(element_id)
            || self.by_element.values().any(|c| *c == control);
        if taken {
            return Err(BindError::DuplicateControl {
                id: element_id.to_string(),
            });
        }
        self.by_element.insert(element_id.to_string(), control);
        Ok(())
    }

    /// Control registered under `element_id`, if any.
    pub fn control(&self, element_id: &str) -> Option<ControlId> {
        self.by_element.get(element_id).copied()
    }

    /// Intent for an activation of `element_id`.
    pub fn resolve(&self, element_id: &str) -> Option<CounterIntent> {
        self.control(element_id).map(ControlId::intent)
    }

    pub fn len(&self) -> usize {
        self.by_element.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_element.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_second_handler_for_same_element() {
        let mut map = ControlMap::new();
        map.register("incr", ControlId::Increment).unwrap();
        let err = map.register("incr", ControlId::Decrement).unwrap_err();
        assert_eq!(err, BindError::DuplicateControl { id: "incr".into() });
    }

    #[test]
    fn register_rejects_second_element_for_same_control() {
        let mut map = ControlMap::new();
        map.register("incr", ControlId::Increment).unwrap();
        assert!(map.register("plus", ControlId::Increment).is_err());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn resolve_maps_element_to_intent() {
        let mut map = ControlMap::new();
        map.register("up", ControlId::Increment).unwrap();
        map.register("zero", ControlId::Reset).unwrap();
        assert_eq!(map.resolve("up"), Some(CounterIntent::Increment));
        assert_eq!(map.resolve("zero"), Some(CounterIntent::Reset));
        assert_eq!(map.resolve("down"), None);
        assert_eq!(map.control("zero"), Some(ControlId::Reset));
    }
}
