//! # Validation Module
//!
//! Preconditions of the "New Sale" form.
//!
//! ## Submission Checks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Complete Sale clicked                                                  │
//! │       │                                                                 │
//! │       ├── customer name empty?  → Required("customer name")            │
//! │       ├── no product selected?  → Required("product")                  │
//! │       ├── quantity <= 0?        → MustBePositive("quantity")           │
//! │       ├── quantity > 99999?     → OutOfRange("quantity")               │
//! │       ├── quantity > stock?     → InsufficientStock                    │
//! │       │                                                                 │
//! │       └── OK → build Sale, call create-sale                            │
//! │                                                                         │
//! │  Every check runs before the backend is contacted.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Product;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates the customer name. Whitespace-only names are empty.
///
/// ```rust
/// use inventory_core::validation::validate_customer_name;
///
/// assert!(validate_customer_name("Ayesha").is_ok());
/// assert!(validate_customer_name("   ").is_err());
/// ```
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "customer name".to_string(),
        });
    }
    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Checks that a product can be chosen in the picker.
pub fn validate_selectable(product: &Product) -> ValidationResult<()> {
    if !product.is_in_stock() {
        return Err(ValidationError::Unavailable {
            field: "product".to_string(),
            value: product.name.clone(),
        });
    }
    Ok(())
}

/// Runs all submission checks in order and returns the product to sell.
///
/// ## Order
/// Required fields come first, the stock check last, so a form that is
/// both incomplete and over stock reports the missing field.
pub fn validate_sale_form<'a>(
    customer_name: &str,
    product: Option<&'a Product>,
    quantity: i64,
) -> CoreResult<&'a Product> {
    validate_customer_name(customer_name)?;

    let product = product.ok_or_else(|| ValidationError::Required {
        field: "product".to_string(),
    })?;

    validate_quantity(quantity)?;

    if !product.can_sell(quantity) {
        return Err(CoreError::InsufficientStock {
            product: product.name.clone(),
            available: product.stock,
            requested: quantity,
        });
    }

    Ok(product)
}
