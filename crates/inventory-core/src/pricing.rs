//! # Pricing
//!
//! The derived numbers of the "New Sale" form.
//!
//! ```text
//! totalPrice      = product.price × quantity
//! discountAmount  = totalPrice × discount / 100
//! totalAfterDisc  = totalPrice − discountAmount
//! amountLeft      = max(0, totalAfterDisc − amountPaid)
//! ```
//!
//! `SaleQuote::compute` is pure: the form calls it on every change of
//! product, quantity, discount or amount paid, and again when building
//! the record to submit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::{DiscountRate, Money};
use crate::types::{PaymentStatus, Product, Sale, SaleLineItem};

/// Pricing for one product line with a discount and a payment applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleQuote {
    pub unit_price: Money,
    pub quantity: i64,
    pub discount: DiscountRate,
    /// Price × quantity.
    pub subtotal: Money,
    /// Amount taken off the subtotal.
    pub discount_amount: Money,
    /// Subtotal minus discount.
    pub total: Money,
    /// Amount paid; negative payments count as zero.
    pub amount_paid: Money,
    /// Unpaid balance, never negative.
    pub amount_left: Money,
}

impl SaleQuote {
    /// Computes the quote.
    ///
    /// ## Example
    /// ```rust
    /// use inventory_core::money::{DiscountRate, Money};
    /// use inventory_core::pricing::SaleQuote;
    ///
    /// let quote = SaleQuote::compute(
    ///     Money::from_cents(5_000),
    ///     1,
    ///     DiscountRate::zero(),
    ///     Money::from_cents(5_000),
    /// );
    /// assert_eq!(quote.total.cents(), 5_000);
    /// assert!(quote.amount_left.is_zero());
    /// ```
    pub fn compute(
        unit_price: Money,
        quantity: i64,
        discount: DiscountRate,
        amount_paid: Money,
    ) -> Self {
        let subtotal = unit_price.multiply_quantity(quantity);
        let discount_amount = discount.amount_of(subtotal);
        let total = subtotal - discount_amount;
        let amount_paid = amount_paid.or_zero();
        let amount_left = (total - amount_paid).or_zero();

        SaleQuote {
            unit_price,
            quantity,
            discount,
            subtotal,
            discount_amount,
            total,
            amount_paid,
            amount_left,
        }
    }

    /// Quote for `quantity` units of `product`.
    pub fn for_product(
        product: &Product,
        quantity: i64,
        discount: DiscountRate,
        amount_paid: Money,
    ) -> Self {
        Self::compute(product.price, quantity, discount, amount_paid)
    }

    pub fn payment_status(&self) -> PaymentStatus {
        PaymentStatus::from_amount_left(self.amount_left)
    }

    /// Builds the single-line sale record for the backend.
    pub fn to_sale(
        &self,
        product_id: i64,
        customer_name: &str,
        phone_number: Option<&str>,
        date: DateTime<Utc>,
    ) -> Sale {
        Sale {
            id: None,
            customer_name: customer_name.to_string(),
            phone_number: phone_number
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            subtotal: self.subtotal,
            discount: self.discount,
            total_discount: self.discount_amount,
            total: self.total,
            amount_paid: self.amount_paid,
            amount_left: self.amount_left,
            date,
            items: vec![SaleLineItem {
                product_id,
                quantity: self.quantity,
                price: self.unit_price,
                discount: self.discount,
                total: self.total,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(price: i64, qty: i64, pct: f64, paid: i64) -> SaleQuote {
        SaleQuote::compute(
            Money::from_cents(price),
            qty,
            DiscountRate::from_percentage(pct),
            Money::from_cents(paid),
        )
    }

    #[test]
    fn test_partial_payment_with_discount() {
        // price=100, qty=2, discount=10%, paid=150
        let q = quote(10_000, 2, 10.0, 15_000);
        assert_eq!(q.subtotal.cents(), 20_000);
        assert_eq!(q.discount_amount.cents(), 2_000);
        assert_eq!(q.total.cents(), 18_000);
        assert_eq!(q.amount_left.cents(), 3_000);
        assert_eq!(q.payment_status(), PaymentStatus::Partial);
    }

    #[test]
    fn test_exact_payment_is_paid() {
        let q = quote(5_000, 1, 0.0, 5_000);
        assert_eq!(q.total.cents(), 5_000);
        assert!(q.amount_left.is_zero());
        assert_eq!(q.payment_status(), PaymentStatus::Paid);
    }

    #[test]
    fn test_overpayment_clamps_to_zero() {
        let q = quote(5_000, 1, 0.0, 9_000);
        assert!(q.amount_left.is_zero());
    }

    #[test]
    fn test_full_discount() {
        let q = quote(5_000, 4, 100.0, 0);
        assert!(q.total.is_zero());
        assert!(q.amount_left.is_zero());
    }

    #[test]
    fn test_negative_payment_counts_as_zero() {
        let q = quote(1_000, 1, 0.0, -500);
        assert!(q.amount_paid.is_zero());
        assert_eq!(q.amount_left.cents(), 1_000);
    }

    #[test]
    fn test_balance_formula_across_inputs() {
        for price in [0, 1, 99, 1_050, 123_456] {
            for qty in [1, 2, 7] {
                for pct in [0.0, 5.0, 12.5, 33.0, 100.0] {
                    for paid in [0, 1, 500, 1_000_000] {
                        let q = quote(price, qty, pct, paid);
                        let expected = (q.total - Money::from_cents(paid)).or_zero();
                        assert_eq!(q.amount_left, expected);
                        assert_eq!(q.total, q.subtotal - q.discount_amount);
                        assert!(!q.amount_left.is_negative());
                    }
                }
            }
        }
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() {
        let q = quote(10_000, 1_000_000_000_000_000, 0.0, 0);
        assert_eq!(q.subtotal.cents(), i64::MAX);
        assert_eq!(q.amount_left.cents(), i64::MAX);

        let q = quote(10_000, 1_000_000_000_000_000, 50.0, i64::MAX);
        assert!(q.amount_left.is_zero());

        // negative quantity with a huge payment
        let q = quote(10_000, -1_000_000_000_000_000, 0.0, i64::MAX);
        assert_eq!(q.total.cents(), i64::MIN);
        assert!(q.amount_left.is_zero());
    }

    #[test]
    fn test_to_sale_builds_single_line() {
        let q = quote(10_000, 2, 10.0, 15_000);
        let date = Utc::now();
        let sale = q.to_sale(42, "Ayesha", Some("  "), date);

        assert_eq!(sale.id, None);
        assert_eq!(sale.phone_number, None);
        assert_eq!(sale.total_discount.cents(), 2_000);
        assert_eq!(sale.amount_left.cents(), 3_000);
        assert_eq!(sale.date, date);
        assert_eq!(sale.items.len(), 1);
        assert_eq!(sale.items[0].product_id, 42);
        assert_eq!(sale.items[0].price.cents(), 10_000);
        assert_eq!(sale.items[0].total.cents(), 18_000);
    }
}
