//! Reducer trait.

use super::action::Action;
use super::state::SliceState;

/// The only place where a slice changes.
///
/// `reduce` must be pure and total: every action maps to a next state,
/// and an action the slice does not care about returns the state as is.
pub trait Reducer {
    type State: SliceState;
    type Action: Action;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
