use crate::ui::mvi::UiState;

/// Counter value as seen by every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub value: i64,
}

impl CounterState {
    /// Decimal text written to the display surface.
    pub fn display_text(&self) -> String {
        self.value.to_string()
    }
}

impl UiState for CounterState {}
