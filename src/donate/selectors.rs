//! Read-only views over [`DonateState`].

use super::action::OperationId;
use super::model::{Charity, CharityId};
use super::state::DonateState;

/// Operations that gate the home page behind a loading indicator.
pub const HOME_OPERATIONS: [OperationId; 2] =
    [OperationId::LoadCharities, OperationId::LoadPayments];

/// A charity joined with the amount raised for it so far.
#[derive(Debug, Clone, PartialEq)]
pub struct CharityWithAmount {
    pub id: CharityId,
    pub name: String,
    pub image: Option<String>,
    pub currency: Option<String>,
    pub amount: f64,
}

impl CharityWithAmount {
    fn from_charity(charity: &Charity, amount: f64) -> Self {
        Self {
            id: charity.id,
            name: charity.name.clone(),
            image: charity.image.clone(),
            currency: charity.currency.clone(),
            amount,
        }
    }
}

/// Charities in load order, each with its raised amount (0 when none).
pub fn charities_with_amounts(state: &DonateState) -> Vec<CharityWithAmount> {
    state
        .charities
        .iter()
        .map(|c| CharityWithAmount::from_charity(c, state.totals.amount_for(c.id)))
        .collect()
}

pub fn is_home_loading(state: &DonateState) -> bool {
    state.loading.any(&HOME_OPERATIONS)
}

pub fn is_submitting(state: &DonateState) -> bool {
    state.loading.is_loading(OperationId::SubmitPayment)
}

pub fn all_donation(state: &DonateState) -> f64 {
    state.totals.all_donation
}
