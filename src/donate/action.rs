use std::fmt;

use uuid::Uuid;

use crate::mvi::Action;

use super::model::{Charity, CharityId, Payment};

/// Remote operations whose in-flight state the slice tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperationId {
    LoadCharities,
    LoadPayments,
    SubmitPayment,
}

impl OperationId {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationId::LoadCharities => "load_charities",
            OperationId::LoadPayments => "load_payments",
            OperationId::SubmitPayment => "submit_payment",
        }
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DonateAction {
    RequestStarted(OperationId),
    /// Sent once per request, whether it succeeded or failed.
    RequestFinished(OperationId),
    CharitiesLoaded(Vec<Charity>),
    PaymentsLoaded(Vec<Payment>),
    /// Additive. Dispatching the same keyless action twice counts the
    /// amount twice; a repeated `idempotency_key` is ignored.
    PaymentSubmitted {
        charity_id: CharityId,
        amount: f64,
        idempotency_key: Option<Uuid>,
    },
    /// Action meant for another slice. Leaves this one untouched.
    Other(String),
}

impl Action for DonateAction {
    fn name(&self) -> &'static str {
        match self {
            DonateAction::RequestStarted(_) => "request_started",
            DonateAction::RequestFinished(_) => "request_finished",
            DonateAction::CharitiesLoaded(_) => "charities_loaded",
            DonateAction::PaymentsLoaded(_) => "payments_loaded",
            DonateAction::PaymentSubmitted { .. } => "payment_submitted",
            DonateAction::Other(_) => "other",
        }
    }
}
