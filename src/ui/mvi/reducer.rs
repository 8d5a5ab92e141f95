//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// The reducer is the only place where state transitions happen and it has
/// no side effects: (State, Intent) -> State.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
