//! Donation totals derived from payment records.

use std::collections::BTreeMap;

use super::model::{CharityId, Payment};

/// Running donation totals.
///
/// `all_donation` is always recomputed from `sum_amount_by_charity`, so the
/// two agree exactly even for fractional amounts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateState {
    pub all_donation: f64,
    pub sum_amount_by_charity: BTreeMap<CharityId, f64>,
}

impl AggregateState {
    fn from_map(sum_amount_by_charity: BTreeMap<CharityId, f64>) -> Self {
        Self {
            all_donation: sum_amount_by_charity.values().sum(),
            sum_amount_by_charity,
        }
    }

    pub fn amount_for(&self, charity_id: CharityId) -> f64 {
        self.sum_amount_by_charity
            .get(&charity_id)
            .copied()
            .unwrap_or(0.0)
    }
}

/// Returns the amount that should count towards totals, if any.
fn countable_amount(amount: Option<f64>) -> Option<f64> {
    amount.filter(|a| a.is_finite() && *a > 0.0)
}

/// Folds a payment list into totals.
///
/// A record without a charity id or a usable amount is skipped from both
/// the grand total and the per-charity map.
pub fn compute_totals<'a, I>(payments: I) -> AggregateState
where
    I: IntoIterator<Item = &'a Payment>,
{
    let by_charity = payments
        .into_iter()
        .fold(BTreeMap::new(), |mut acc, payment| {
            let (Some(charity_id), Some(amount)) =
                (payment.charities_id, countable_amount(payment.amount))
            else {
                return acc;
            };
            *acc.entry(charity_id).or_insert(0.0) += amount;
            acc
        });
    AggregateState::from_map(by_charity)
}

/// Adds one accepted donation on top of existing totals.
pub fn apply_one_submission(
    state: &AggregateState,
    charity_id: CharityId,
    amount: f64,
) -> AggregateState {
    let mut sum_amount_by_charity = state.sum_amount_by_charity.clone();
    *sum_amount_by_charity.entry(charity_id).or_insert(0.0) += amount;
    AggregateState::from_map(sum_amount_by_charity)
}
