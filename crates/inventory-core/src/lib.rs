//! # inventory-core: Pure Business Logic for the Sales Screen
//!
//! Everything the sales screen computes without talking to the backend:
//! money, discount rates, the sale record, the pricing quote and the
//! submission preconditions.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Sales Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Sales template (table + "New Sale" modal)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ binds to                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              inventory-sales (SalesView, backend client)        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ inventory-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ SaleQuote │  │  submit   │  │   │
//! │  │   │   Sale    │  │ Discount  │  │ balance   │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO BACKEND • NO ASYNC • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::money::{DiscountRate, Money};
//! use inventory_core::pricing::SaleQuote;
//!
//! let quote = SaleQuote::compute(
//!     Money::from_cents(10_000),
//!     2,
//!     DiscountRate::from_percentage(10.0),
//!     Money::from_cents(15_000),
//! );
//!
//! assert_eq!(quote.total.cents(), 18_000);
//! assert_eq!(quote.amount_left.cents(), 3_000);
//! ```

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{DiscountRate, Money};
pub use pricing::SaleQuote;
pub use types::*;

/// Default currency symbol shown next to amounts.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "Rs";

/// Minor units per major unit (paisa per rupee, cents per dollar).
pub const MINOR_UNITS: i64 = 100;

/// Largest quantity a single sale line accepts.
pub const MAX_ITEM_QUANTITY: i64 = 99_999;
