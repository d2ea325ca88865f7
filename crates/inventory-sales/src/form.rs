//! # Sale Form
//!
//! State of the "New Sale" modal.
//!
//! ## Field Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input                  Stored as              Feeds                    │
//! │  ─────                  ─────────              ─────                    │
//! │  Customer Name  ──────► customer_name          validation               │
//! │  Phone Number   ──────► phone_number           sale record              │
//! │  Product        ──────► selected_product ──┐                            │
//! │  Quantity       ──────► quantity ──────────┤                            │
//! │  Discount (%)   ──────► discount ──────────┼──► recompute()             │
//! │  Amount Paid    ──────► amount_paid (text)─┘       │                    │
//! │                                                    ▼                    │
//! │  Amount Left (read only) ◄──────────────────── amount_left              │
//! │                                                                         │
//! │  Successful sale → reset() → every field back to its default            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inventory_core::validation::{validate_selectable, ValidationResult};
use inventory_core::{DiscountRate, Money, Product, SaleQuote, MAX_ITEM_QUANTITY};
use serde::Serialize;

/// Transient state of the "New Sale" modal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleForm {
    /// Whether the modal is shown.
    pub open: bool,
    pub customer_name: String,
    pub phone_number: String,
    pub selected_product: Option<Product>,
    pub quantity: i64,
    pub discount: DiscountRate,
    /// Raw text of the Amount Paid input.
    pub amount_paid: String,
    /// Last computed unpaid balance.
    #[serde(with = "inventory_core::money::decimal")]
    pub amount_left: Money,
}

impl Default for SaleForm {
    fn default() -> Self {
        SaleForm {
            open: false,
            customer_name: String::new(),
            phone_number: String::new(),
            selected_product: None,
            quantity: 1,
            discount: DiscountRate::zero(),
            amount_paid: String::new(),
            amount_left: Money::zero(),
        }
    }
}

impl SaleForm {
    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn set_phone_number(&mut self, phone: impl Into<String>) {
        self.phone_number = phone.into();
    }

    /// Sets the quantity from input text. See [`parse_quantity`].
    pub fn set_quantity_input(&mut self, text: &str) {
        self.set_quantity(parse_quantity(text));
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
        self.recompute();
    }

    /// Sets the discount from input text. See [`parse_discount`].
    pub fn set_discount_input(&mut self, text: &str) {
        self.set_discount(parse_discount(text));
    }

    pub fn set_discount(&mut self, discount: DiscountRate) {
        self.discount = discount;
        self.recompute();
    }

    pub fn set_amount_paid(&mut self, text: impl Into<String>) {
        self.amount_paid = text.into();
        self.recompute();
    }

    /// Picks a product from `products` by id.
    ///
    /// ## Behavior
    /// - `None` (the "Select a product" placeholder): clears the selection
    /// - Unknown id: clears the selection
    /// - Zero-stock product: refused, selection unchanged
    pub fn select_product(&mut self, products: &[Product], id: Option<i64>) -> ValidationResult<()> {
        let product = id.and_then(|id| products.iter().find(|p| p.id == id));
        if let Some(product) = product {
            validate_selectable(product)?;
        }
        self.selected_product = product.cloned();
        self.recompute();
        Ok(())
    }

    /// Amount paid as money; unparsable or negative text counts as zero.
    pub fn paid(&self) -> Money {
        Money::parse_decimal(&self.amount_paid)
            .unwrap_or_default()
            .or_zero()
    }

    /// Pricing for the current inputs, if a product is selected.
    pub fn quote(&self) -> Option<SaleQuote> {
        self.selected_product
            .as_ref()
            .map(|p| SaleQuote::for_product(p, self.quantity, self.discount, self.paid()))
    }

    /// Refreshes `amount_left`. Without a product the last value stays.
    pub fn recompute(&mut self) {
        if let Some(quote) = self.quote() {
            self.amount_left = quote.amount_left;
        }
    }

    /// The enabled state of the Complete Sale button.
    pub fn can_submit(&self) -> bool {
        !self.customer_name.trim().is_empty() && self.selected_product.is_some() && self.quantity > 0
    }

    /// Back to defaults; also closes the modal.
    pub fn reset(&mut self) {
        *self = SaleForm::default();
    }
}

/// Parses the Quantity input like an integer field.
///
/// Reads an optional sign and the leading digits ("3.7" → 3, "12abc" → 12).
/// Empty, unparsable or zero input becomes 1. The magnitude is capped at
/// one past [`MAX_ITEM_QUANTITY`] so validation still rejects it.
///
/// ```rust
/// use inventory_core::MAX_ITEM_QUANTITY;
/// use inventory_sales::form::parse_quantity;
///
/// assert_eq!(parse_quantity("4"), 4);
/// assert_eq!(parse_quantity(""), 1);
/// assert_eq!(parse_quantity("0"), 1);
/// assert_eq!(parse_quantity("-2"), -2);
/// assert_eq!(parse_quantity("1000000000000000000000"), MAX_ITEM_QUANTITY + 1);
/// ```
pub fn parse_quantity(text: &str) -> i64 {
    let text = text.trim();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();

    let limit = MAX_ITEM_QUANTITY + 1;
    let magnitude = match digits.parse::<i64>() {
        Ok(n) => n.min(limit),
        // only digits were kept, so the parse fails on empty or too long input
        Err(_) if !digits.is_empty() => limit,
        Err(_) => 0,
    };

    if magnitude == 0 {
        1
    } else {
        sign * magnitude
    }
}

/// Parses the Discount (%) input; unparsable input is 0%, range is 0–100.
///
/// ```rust
/// use inventory_sales::form::parse_discount;
///
/// assert_eq!(parse_discount("10").bps(), 1000);
/// assert_eq!(parse_discount("abc").bps(), 0);
/// assert_eq!(parse_discount("250").bps(), 10_000);
/// ```
pub fn parse_discount(text: &str) -> DiscountRate {
    text.trim()
        .parse::<f64>()
        .map(DiscountRate::from_percentage)
        .unwrap_or_default()
}
