//! State core for the Tamboon donation page.
//!
//! Loads charities and payments from a REST API, keeps running donation
//! totals in an injectable [`store::Store`], and exposes selectors for a
//! presentation layer to render.

pub mod api;
pub mod config;
pub mod donate;
pub mod error;
pub mod format;
pub mod logging;
pub mod mvi;
pub mod notify;
pub mod store;

pub use error::{DonateError, HomeLoadError};
