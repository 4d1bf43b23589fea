//! # Validation Module
//!
//! Input validation shared by the discount resolver and order aggregator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard frontend (TypeScript)                              │
//! │  ├── Basic format checks (empty fields, number inputs)                 │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Quantity bounds                                                   │
//! │  ├── Non-negative prices                                               │
//! │  └── Discount range [0, 100]                                           │
//! │                                                                         │
//! │  Defense in depth: the engine never trusts UI-side checks              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line-item quantity.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed `MAX_ITEM_QUANTITY` (999)
///
/// ## Example
/// ```rust
/// use pharma_core::validation::validate_quantity;
///
/// assert!(validate_quantity(5).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(1000).is_err());
/// ```
pub fn validate_quantity(quantity: i64) -> CoreResult<()> {
    if quantity < 1 || quantity > MAX_ITEM_QUANTITY {
        return Err(CoreError::InvalidQuantity {
            quantity,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a product unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free samples)
pub fn validate_unit_price(price: Money) -> CoreResult<()> {
    if price.is_negative() {
        return Err(CoreError::InvalidPrice {
            price: price.amount(),
        });
    }

    Ok(())
}

/// Validates a raw discount percentage.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
///
/// Called by `Percent::new`; every `Percent` in the system has passed
/// through this check exactly once.
pub fn validate_percent(value: Decimal) -> CoreResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(CoreError::InvalidDiscount { percent: value });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
