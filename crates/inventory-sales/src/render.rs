//! # Render Models
//!
//! What the template binds to: one `SaleRow` per history entry and one
//! `ProductOption` per picker entry. All text is pre-formatted here.
//!
//! ```text
//! ┌────────────┬──────────────────────┬─────────────────────────┬─────────┐
//! │ Date       │ Customer             │ Amount                  │ Status  │
//! ├────────────┼──────────────────────┼─────────────────────────┼─────────┤
//! │ 2026-03-01 │ Ayesha               │ Rs 180.00               │ Partial │
//! │            │ 0300-1234567         │ Discount: 10% (Rs 20.00)│         │
//! └────────────┴──────────────────────┴─────────────────────────┴─────────┘
//! ```

use inventory_core::{PaymentStatus, Product, Sale};
use serde::Serialize;

use crate::config::SalesConfig;

/// Placeholder shown first in the product picker.
pub const PRODUCT_PLACEHOLDER: &str = "Select a product";

/// A row of the sales history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRow {
    pub id: Option<i64>,
    pub date: String,
    pub customer: String,
    pub phone: Option<String>,
    pub total: String,
    /// Only present when a discount was given.
    pub discount_detail: Option<String>,
    pub status: PaymentStatus,
}

impl SaleRow {
    pub fn from_sale(sale: &Sale, config: &SalesConfig) -> Self {
        let discount_detail = (!sale.discount.is_zero()).then(|| {
            format!(
                "Discount: {}% ({})",
                sale.discount,
                config.format_currency(sale.total_discount)
            )
        });

        SaleRow {
            id: sale.id,
            date: config.format_date(sale.date),
            customer: sale.customer_name.clone(),
            phone: sale.phone().map(str::to_string),
            total: config.format_currency(sale.total),
            discount_detail,
            status: sale.payment_status(),
        }
    }

    /// Badge text, "Paid" or "Partial".
    pub fn badge(&self) -> &'static str {
        self.status.label()
    }
}

/// An entry of the product picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    /// `None` for the placeholder.
    pub product_id: Option<i64>,
    pub label: String,
    pub disabled: bool,
}

impl ProductOption {
    pub fn placeholder() -> Self {
        ProductOption {
            product_id: None,
            label: PRODUCT_PLACEHOLDER.to_string(),
            disabled: false,
        }
    }

    /// "Rice 5kg - Rs 100.00 (Stock: 3)"; disabled when out of stock.
    pub fn from_product(product: &Product, config: &SalesConfig) -> Self {
        ProductOption {
            product_id: Some(product.id),
            label: format!(
                "{} - {} (Stock: {})",
                product.name,
                config.format_currency(product.price),
                product.stock
            ),
            disabled: !product.is_in_stock(),
        }
    }
}

/// Placeholder followed by every product, in catalog order.
pub fn product_options(products: &[Product], config: &SalesConfig) -> Vec<ProductOption> {
    std::iter::once(ProductOption::placeholder())
        .chain(products.iter().map(|p| ProductOption::from_product(p, config)))
        .collect()
}
