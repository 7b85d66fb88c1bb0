use tracing::debug;

use crate::mvi::Reducer;

use super::action::DonateAction;
use super::aggregator::{apply_one_submission, compute_totals};
use super::state::DonateState;

/// Pure transitions for [`DonateState`]. Side effects (HTTP, notifications)
/// happen in the orchestrator around the dispatch call.
pub struct DonateReducer;

impl Reducer for DonateReducer {
    type State = DonateState;
    type Action = DonateAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            DonateAction::RequestStarted(op) => DonateState {
                loading: state.loading.started(op),
                ..state
            },
            DonateAction::RequestFinished(op) => DonateState {
                loading: state.loading.finished(op),
                ..state
            },
            DonateAction::CharitiesLoaded(charities) => DonateState {
                charities,
                ..state
            },
            // Reloaded totals are the new base; earlier keys no longer apply.
            DonateAction::PaymentsLoaded(payments) => DonateState {
                totals: compute_totals(&payments),
                submitted_keys: Default::default(),
                ..state
            },
            DonateAction::PaymentSubmitted {
                charity_id,
                amount,
                idempotency_key,
            } => {
                let mut submitted_keys = state.submitted_keys.clone();
                if let Some(key) = idempotency_key {
                    if !submitted_keys.insert(key) {
                        debug!(%key, "Submission already counted, ignoring");
                        return state;
                    }
                }
                DonateState {
                    totals: apply_one_submission(&state.totals, charity_id, amount),
                    submitted_keys,
                    ..state
                }
            }
            DonateAction::Other(_) => state,
        }
    }
}
