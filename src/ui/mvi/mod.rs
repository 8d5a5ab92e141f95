//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Activation ──→ Intent ──→ Reducer ──→ State ──→ Display surface
//!      ↑                                               │
//!      └───────────────────────────────────────────────┘
//! ```
//!
//! - **State**: value-typed snapshot of what a view shows
//! - **Intent**: a user activation or system event
//! - **Reducer**: pure function from (State, Intent) to the next State

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
