//! The donation page slice: records, totals, transitions, selectors and
//! the workflows that drive them.

mod action;
pub mod aggregator;
mod model;
pub mod orchestrator;
mod reducer;
pub mod selectors;
mod state;

pub use action::{DonateAction, OperationId};
pub use aggregator::AggregateState;
pub use model::{
    Charity, CharityId, DonationRequest, NewPayment, Payment, PaymentId, PaymentReceipt,
};
pub use orchestrator::{HomeOrchestrator, OrchestratorSettings};
pub use reducer::DonateReducer;
pub use selectors::CharityWithAmount;
pub use state::{DonateState, LoadingState};
