//! # Domain Types
//!
//! The records exchanged with the backend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │  SaleLineItem   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  customer_name  │   │  product_id     │       │
//! │  │  name           │   │  subtotal       │   │  quantity       │       │
//! │  │  price          │   │  total          │   │  price (frozen) │       │
//! │  │  stock          │   │  amount_left    │   │  total          │       │
//! │  └─────────────────┘   │  items ─────────┼──►└─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │ PaymentStatus   │   Paid ◄── amount_left == 0                        │
//! │  │ Paid / Partial  │   Partial ◄── amount_left > 0                      │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Field names are camelCase and amounts are decimal numbers in major
//! units, exactly as the backend stores them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::{DiscountRate, Money};

// =============================================================================
// Product
// =============================================================================

/// A catalog product. Owned by the backend, read-only on the sales screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,

    /// Display name shown in the product picker.
    pub name: String,

    /// Unit price.
    #[serde(with = "crate::money::decimal")]
    pub price: Money,

    /// Units currently available.
    pub stock: i64,
}

impl Product {
    /// Zero-stock products are listed in the picker but cannot be chosen.
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Checks whether `quantity` units can be taken from current stock.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        quantity <= self.stock
    }
}

// =============================================================================
// Sale Line Item
// =============================================================================

/// A line of a sale. Price and discount are frozen at the time of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLineItem {
    pub product_id: i64,
    pub quantity: i64,

    /// Unit price at the time of sale.
    #[serde(with = "crate::money::decimal")]
    pub price: Money,

    pub discount: DiscountRate,

    /// Line total after discount.
    #[serde(with = "crate::money::decimal")]
    pub total: Money,
}

// =============================================================================
// Sale
// =============================================================================

/// A completed sale.
///
/// ## Invariants
/// - `total = subtotal - total_discount`
/// - `total_discount = subtotal × discount`
/// - `amount_left = max(0, total - amount_paid)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Assigned by the backend; absent on records we are about to create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub customer_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(with = "crate::money::decimal")]
    pub subtotal: Money,

    pub discount: DiscountRate,

    #[serde(with = "crate::money::decimal")]
    pub total_discount: Money,

    #[serde(with = "crate::money::decimal")]
    pub total: Money,

    #[serde(with = "crate::money::decimal")]
    pub amount_paid: Money,

    #[serde(with = "crate::money::decimal")]
    pub amount_left: Money,

    /// Submission time, RFC 3339 on the wire.
    pub date: DateTime<Utc>,

    #[serde(default)]
    pub items: Vec<SaleLineItem>,
}

impl Sale {
    /// Paid when nothing is left to pay, Partial otherwise.
    pub fn payment_status(&self) -> PaymentStatus {
        PaymentStatus::from_amount_left(self.amount_left)
    }

    /// Phone number, if one was entered.
    pub fn phone(&self) -> Option<&str> {
        self.phone_number.as_deref().filter(|p| !p.trim().is_empty())
    }
}

// =============================================================================
// Payment Status
// =============================================================================

/// The status badge on a sales history row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Nothing left to pay.
    Paid,
    /// Some balance is still owed.
    Partial,
}

impl PaymentStatus {
    pub fn from_amount_left(amount_left: Money) -> Self {
        if amount_left.is_positive() {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Paid
        }
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Partial => "Partial",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
