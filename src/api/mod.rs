//! HTTP access to the donation REST API.

mod client;
pub mod error;

pub use client::{HttpClient, ReqwestClient};
pub use error::ApiError;
