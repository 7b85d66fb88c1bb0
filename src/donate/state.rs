use std::collections::{BTreeMap, BTreeSet};

use uuid::Uuid;

use crate::mvi::SliceState;

use super::action::OperationId;
use super::aggregator::AggregateState;
use super::model::Charity;

/// In-flight request counts keyed by operation. An operation is loading
/// while its count is non-zero, so two overlapping submissions keep
/// `SubmitPayment` set until both have finished.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadingState {
    in_flight: BTreeMap<OperationId, u32>,
}

impl LoadingState {
    pub fn is_loading(&self, op: OperationId) -> bool {
        self.in_flight.get(&op).is_some_and(|n| *n > 0)
    }

    pub fn any(&self, ops: &[OperationId]) -> bool {
        ops.iter().any(|op| self.is_loading(*op))
    }

    /// Returns a copy with one more request of `op` in flight.
    pub fn started(&self, op: OperationId) -> Self {
        let mut in_flight = self.in_flight.clone();
        *in_flight.entry(op).or_insert(0) += 1;
        Self { in_flight }
    }

    /// Returns a copy with one request of `op` settled. Never goes below zero.
    pub fn finished(&self, op: OperationId) -> Self {
        let mut in_flight = self.in_flight.clone();
        if let Some(n) = in_flight.get_mut(&op) {
            *n = n.saturating_sub(1);
            if *n == 0 {
                in_flight.remove(&op);
            }
        }
        Self { in_flight }
    }
}

/// The donation page slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DonateState {
    pub charities: Vec<Charity>,
    pub totals: AggregateState,
    pub loading: LoadingState,
    /// Idempotency keys of submissions counted on top of the last
    /// `PaymentsLoaded`. Cleared when payments are reloaded, so it holds at
    /// most the submissions made since the last load.
    pub submitted_keys: BTreeSet<Uuid>,
}

impl SliceState for DonateState {}
