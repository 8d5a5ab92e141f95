use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterIntent {
    Increment,
    Decrement,
    /// Sets the value to the literal 0, whatever it was before.
    Reset,
}

impl Intent for CounterIntent {}
