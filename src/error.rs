//! Errors surfaced by the donation workflows.

use thiserror::Error;

use crate::api::ApiError;
use crate::donate::OperationId;

#[derive(Debug, Error)]
pub enum DonateError {
    /// Loading charities or payments failed. Existing data is kept.
    #[error("Failed to {operation}: {source}")]
    Fetch {
        operation: OperationId,
        #[source]
        source: ApiError,
    },

    /// The donation POST failed. Totals are unchanged.
    #[error("Donation failed: {0}")]
    Submission(#[source] ApiError),

    #[error("Invalid donation amount: {0}")]
    InvalidAmount(f64),
}

impl DonateError {
    pub fn operation(&self) -> OperationId {
        match self {
            DonateError::Fetch { operation, .. } => *operation,
            DonateError::Submission(_) | DonateError::InvalidAmount(_) => {
                OperationId::SubmitPayment
            }
        }
    }
}

/// One or both home page loads failed.
#[derive(Debug, Error)]
#[error("Home data incomplete: {}", join_failures(.failures))]
pub struct HomeLoadError {
    pub failures: Vec<DonateError>,
}

impl HomeLoadError {
    pub fn failed_operations(&self) -> Vec<OperationId> {
        self.failures.iter().map(DonateError::operation).collect()
    }
}

fn join_failures(failures: &[DonateError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_names_operation() {
        let err = DonateError::Fetch {
            operation: OperationId::LoadPayments,
            source: ApiError::Status {
                status: 500,
                message: "boom".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Failed to load_payments: Server error: 500 - boom"
        );
    }

    #[test]
    fn home_load_error_lists_all_failures() {
        let err = HomeLoadError {
            failures: vec![
                DonateError::Fetch {
                    operation: OperationId::LoadCharities,
                    source: ApiError::InvalidUrl("x".to_string()),
                },
                DonateError::Fetch {
                    operation: OperationId::LoadPayments,
                    source: ApiError::InvalidUrl("y".to_string()),
                },
            ],
        };
        assert_eq!(
            err.failed_operations(),
            vec![OperationId::LoadCharities, OperationId::LoadPayments]
        );
        assert_eq!(
            err.to_string(),
            "Home data incomplete: Failed to load_charities: Invalid URL: x; \
             Failed to load_payments: Invalid URL: y"
        );
    }
}
