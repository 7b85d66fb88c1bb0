//! Records served by the donation API.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a charity, as served by the `/charities` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharityId(pub u64);

impl fmt::Display for CharityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CharityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Payment identifier. Older API servers hand out numbers, newer ones strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaymentId {
    Number(u64),
    Text(String),
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentId::Number(n) => write!(f, "{}", n),
            PaymentId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charity {
    pub id: CharityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Charity {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: CharityId(id),
            name: name.into(),
            image: None,
            currency: None,
        }
    }
}

/// A stored payment. Both `charities_id` and `amount` may be absent in data
/// written by older clients; such records never count towards totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default)]
    pub id: Option<PaymentId>,
    #[serde(default)]
    pub charities_id: Option<CharityId>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Payment {
    pub fn new(id: u64, charities_id: u64, amount: f64) -> Self {
        Self {
            id: Some(PaymentId::Number(id)),
            charities_id: Some(CharityId(charities_id)),
            amount: Some(amount),
            currency: None,
        }
    }
}

/// What the view hands over when the user presses "Pay".
#[derive(Debug, Clone, PartialEq)]
pub struct DonationRequest {
    pub charity_id: CharityId,
    pub charity_name: String,
    pub amount: f64,
}

/// Body of `POST /payments`.
///
/// `idempotency_key` lets a server that supports it drop a retried
/// submission it already stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub charities_id: CharityId,
    pub amount: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<Uuid>,
}

/// The created payment echoed back by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    #[serde(default)]
    pub id: Option<PaymentId>,
    #[serde(default)]
    pub charities_id: Option<CharityId>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}
