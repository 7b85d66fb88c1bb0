//! Remote workflows for the donation page.
//!
//! Each workflow brackets its request with `RequestStarted` /
//! `RequestFinished` so the loading flags always settle, commits results
//! through the store, and leaves state untouched on failure.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::api::{ApiError, HttpClient};
use crate::config::Config;
use crate::error::{DonateError, HomeLoadError};
use crate::format::AmountFormatter;
use crate::notify::{MessageProps, Notification, Notifier};
use crate::store::Store;

use super::action::{DonateAction, OperationId};
use super::model::{Charity, DonationRequest, NewPayment, Payment, PaymentReceipt};

/// Endpoint paths and presentation constants used by the workflows.
#[derive(Debug, Clone, PartialEq)]
pub struct OrchestratorSettings {
    pub charities_path: String,
    pub payments_path: String,
    pub currency: String,
    pub notification_timeout: Duration,
}

impl OrchestratorSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            charities_path: config.api.charities_path.clone(),
            payments_path: config.api.payments_path.clone(),
            currency: config.api.currency.clone(),
            notification_timeout: Duration::from_millis(config.notification.timeout_ms),
        }
    }
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

pub struct HomeOrchestrator {
    store: Store,
    http: Arc<dyn HttpClient>,
    notifier: Arc<dyn Notifier>,
    formatter: Arc<dyn AmountFormatter>,
    settings: OrchestratorSettings,
}

impl HomeOrchestrator {
    pub fn new(
        store: Store,
        http: Arc<dyn HttpClient>,
        notifier: Arc<dyn Notifier>,
        formatter: Arc<dyn AmountFormatter>,
        settings: OrchestratorSettings,
    ) -> Self {
        Self {
            store,
            http,
            notifier,
            formatter,
            settings,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Loads charities and payments concurrently.
    ///
    /// Both loads always run to completion; one failing does not cancel the
    /// other. Returns every failure once both have settled.
    pub async fn init_home_data(&self) -> Result<(), HomeLoadError> {
        let (charities, payments) = tokio::join!(self.load_charities(), self.load_payments());

        let failures: Vec<DonateError> = [charities.err(), payments.err()]
            .into_iter()
            .flatten()
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(HomeLoadError { failures })
        }
    }

    async fn load_charities(&self) -> Result<(), DonateError> {
        let op = OperationId::LoadCharities;
        let charities: Vec<Charity> = self.fetch(op, &self.settings.charities_path).await?;
        info!(count = charities.len(), "Charities loaded");
        self.commit(op, DonateAction::CharitiesLoaded(charities));
        Ok(())
    }

    async fn load_payments(&self) -> Result<(), DonateError> {
        let op = OperationId::LoadPayments;
        let payments: Vec<Payment> = self.fetch(op, &self.settings.payments_path).await?;
        info!(count = payments.len(), "Payments loaded");
        self.commit(op, DonateAction::PaymentsLoaded(payments));
        Ok(())
    }

    /// GETs `path` and decodes it. On failure the flag for `op` is cleared
    /// here; on success the caller clears it via [`Self::commit`].
    async fn fetch<T: DeserializeOwned>(&self, op: OperationId, path: &str) -> Result<T, DonateError> {
        self.store.dispatch(DonateAction::RequestStarted(op));

        let result = async {
            let value = self.http.get(path).await?;
            Ok::<T, ApiError>(serde_json::from_value(value)?)
        }
        .await;

        result.map_err(|source| {
            warn!(
                operation = %op,
                kind = source.kind(),
                transient = source.is_transient(),
                error = %source,
                "Fetch failed"
            );
            self.store.dispatch(DonateAction::RequestFinished(op));
            DonateError::Fetch {
                operation: op,
                source,
            }
        })
    }

    /// Commits a loaded result, then clears the loading flag so the view
    /// never sees "not loading" before the data is in place.
    fn commit(&self, op: OperationId, action: DonateAction) {
        self.store.dispatch(action);
        self.store.dispatch(DonateAction::RequestFinished(op));
    }

    /// Submits a donation under a fresh idempotency key.
    pub async fn submit_donation(
        &self,
        request: DonationRequest,
    ) -> Result<PaymentReceipt, DonateError> {
        self.submit_donation_with_key(request, Uuid::new_v4()).await
    }

    /// Submits a donation. Reusing `key` when retrying a submission whose
    /// outcome is unknown keeps it from being counted twice.
    ///
    /// On success the totals grow by exactly one `PaymentSubmitted` and a
    /// thank-you notification is shown, unless `key` was already counted,
    /// in which case neither happens again. On failure nothing but the
    /// submit flag changes and the error is returned to the caller.
    pub async fn submit_donation_with_key(
        &self,
        request: DonationRequest,
        key: Uuid,
    ) -> Result<PaymentReceipt, DonateError> {
        if !(request.amount.is_finite() && request.amount > 0.0) {
            return Err(DonateError::InvalidAmount(request.amount));
        }

        let op = OperationId::SubmitPayment;
        let body = NewPayment {
            charities_id: request.charity_id,
            amount: request.amount,
            currency: self.settings.currency.clone(),
            idempotency_key: Some(key),
        };

        self.store.dispatch(DonateAction::RequestStarted(op));
        let result = self.post_payment(&body).await;

        let receipt = match result {
            Ok(receipt) => receipt,
            Err(source) => {
                warn!(
                    charity_id = %request.charity_id,
                    kind = source.kind(),
                    transient = source.is_transient(),
                    error = %source,
                    "Donation failed"
                );
                self.store.dispatch(DonateAction::RequestFinished(op));
                return Err(DonateError::Submission(source));
            }
        };

        let charity_id = receipt.charities_id.unwrap_or(request.charity_id);
        let amount = receipt
            .amount
            .filter(|a| a.is_finite() && *a > 0.0)
            .unwrap_or(request.amount);

        let already_counted = self.store.select(|s| s.submitted_keys.contains(&key));
        self.commit(
            op,
            DonateAction::PaymentSubmitted {
                charity_id,
                amount,
                idempotency_key: Some(key),
            },
        );
        if already_counted {
            debug!(%key, "Retried donation already counted, no notification");
            return Ok(receipt);
        }
        info!(%charity_id, amount, "Donation accepted");

        let id = receipt
            .id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| key.to_string());
        self.notifier.show(Notification {
            id,
            message: MessageProps {
                title: request.charity_name,
                description: format!("Thanks for donating {}", self.formatter.format(amount)),
            },
            timeout: self.settings.notification_timeout,
        });

        Ok(receipt)
    }

    async fn post_payment(&self, body: &NewPayment) -> Result<PaymentReceipt, ApiError> {
        let value = self
            .http
            .post(&self.settings.payments_path, serde_json::to_value(body)?)
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
