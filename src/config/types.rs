use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub format: FormatConfig,
}

/// Donation API endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API (e.g., "http://localhost:3001").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    #[serde(default = "default_charities_path")]
    pub charities_path: String,
    /// Used for both listing and creating payments.
    #[serde(default = "default_payments_path")]
    pub payments_path: String,
    /// Currency code sent with each new payment.
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Donation confirmation popup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Auto-dismiss delay in milliseconds (default: 4500).
    #[serde(default = "default_notification_timeout_ms")]
    pub timeout_ms: u64,
}

/// Amount display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Currency code shown before amounts. Empty or absent prints bare numbers.
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default = "default_max_fraction_digits")]
    pub max_fraction_digits: usize,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_charities_path() -> String {
    "/charities".to_string()
}

fn default_payments_path() -> String {
    "/payments".to_string()
}

fn default_currency() -> String {
    "THB".to_string()
}

fn default_notification_timeout_ms() -> u64 {
    4500
}

fn default_max_fraction_digits() -> usize {
    2
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            charities_path: default_charities_path(),
            payments_path: default_payments_path(),
            currency: default_currency(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_notification_timeout_ms(),
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency: None,
            max_fraction_digits: default_max_fraction_digits(),
        }
    }
}
