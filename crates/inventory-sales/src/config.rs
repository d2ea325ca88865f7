//! # Sales Screen Configuration
//!
//! Display settings for the sales screen.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`INVENTORY_*`)
//! 2. Defaults (this file)
//!
//! Read-only after the view is built.

use chrono::{DateTime, Local, Utc};
use inventory_core::{Money, DEFAULT_CURRENCY_SYMBOL};
use serde::{Deserialize, Serialize};

/// Default capacity of the dashboard reload channel.
pub const DEFAULT_DASHBOARD_CAPACITY: usize = 16;

/// Sales screen configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesConfig {
    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol printed before amounts
    pub currency_symbol: String,

    /// `chrono` format string for the Date column
    pub date_format: String,

    /// Buffered reload events per dashboard subscriber
    pub dashboard_capacity: usize,
}

impl Default for SalesConfig {
    /// Pakistani rupee, ISO calendar dates.
    fn default() -> Self {
        SalesConfig {
            currency_code: "PKR".to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            date_format: "%Y-%m-%d".to_string(),
            dashboard_capacity: DEFAULT_DASHBOARD_CAPACITY,
        }
    }
}

impl SalesConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `INVENTORY_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `INVENTORY_DATE_FORMAT`: Override the Date column format
    /// - `INVENTORY_DASHBOARD_CAPACITY`: Override the reload channel size
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = SalesConfig::default();

        if let Some(symbol) = lookup("INVENTORY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(format) = lookup("INVENTORY_DATE_FORMAT") {
            config.date_format = format;
        }

        if let Some(capacity) = lookup("INVENTORY_DASHBOARD_CAPACITY") {
            match capacity.parse::<usize>() {
                Ok(capacity) if capacity > 0 => config.dashboard_capacity = capacity,
                _ => tracing::warn!(%capacity, "Ignoring invalid INVENTORY_DASHBOARD_CAPACITY"),
            }
        }

        config
    }

    /// Formats an amount with the currency symbol.
    ///
    /// ```rust
    /// use inventory_core::Money;
    /// use inventory_sales::SalesConfig;
    ///
    /// let config = SalesConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(18_000)), "Rs 180.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!("{} {}", self.currency_symbol, amount)
    }

    /// Formats a sale timestamp as a local calendar date.
    pub fn format_date(&self, date: DateTime<Utc>) -> String {
        date.with_timezone(&Local).format(&self.date_format).to_string()
    }
}
