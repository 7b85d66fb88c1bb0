//! Unidirectional state primitives.
//!
//! ```text
//! Orchestrator ──dispatch──→ Reducer ──→ State ──→ Selectors ──→ View
//!       ↑                                                         │
//!       └─────────────────────── user action ─────────────────────┘
//! ```
//!
//! - **State**: owned value describing one slice of the application
//! - **Action**: tagged description of a requested transition
//! - **Reducer**: pure function `(State, Action) -> State`

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::SliceState;
